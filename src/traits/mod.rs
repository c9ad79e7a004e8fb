pub mod dual_num_traits;
pub mod dual_ops;
