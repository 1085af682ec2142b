//! HTTP routes for the chat server

pub mod chatbot;
