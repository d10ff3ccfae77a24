/*!
# `content2tokens` Library

Flattens nested content documents into Tokens Studio token sets.
*/

pub mod commands;
pub mod flatten;
pub mod input;
pub mod merge;
pub mod path;
pub mod token;
pub mod wrap;
