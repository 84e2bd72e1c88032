use anchor_lang::prelude::*;

pub mod error;
pub mod math;
pub mod quote;
pub mod state;
pub mod utils;

declare_id!("EdG4rQqC9LCY4MQWLGXerQ7h1LknKRmSiHL1upCNEdqD");
