pub mod deposit;
pub mod rewards;
pub mod withdraw;
