//! Where command output goes.

/// The chat framework's reply channel for one command invocation.
pub trait ReplyChannel {
    fn reply(&self, message: String);
}

/// Prints replies to stdout, one per line block.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReply;

impl ReplyChannel for StdoutReply {
    fn reply(&self, message: String) {
        println!("{message}");
    }
}
