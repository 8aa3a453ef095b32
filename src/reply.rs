use std::fmt;

// A single reply value produced by a store command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    SimpleString(String),

    BulkString(Option<String>),

    Integer(i64),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::SimpleString(s) => f.write_str(s),
            Reply::BulkString(Some(s)) => f.write_str(s),
            Reply::BulkString(None) => f.write_str("nil"),
            Reply::Integer(i) => f.write_str(itoa::Buffer::new().format(*i)),
        }
    }
}
