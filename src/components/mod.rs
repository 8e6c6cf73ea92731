// One module per form screen.
pub mod chat_input;
pub mod signup;
pub mod survey;
