mod channel;
mod message;
