pub mod allocation;
pub mod dca;
pub mod goal;
pub mod history;
pub mod plan;
pub mod records;
pub mod risk;
pub mod wizard;
