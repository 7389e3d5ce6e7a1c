// Career assistant: keyword-triggered canned replies, no model behind it.

pub mod handlers;
pub mod replies;
