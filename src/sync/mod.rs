pub mod shared_opt;
