pub mod dct_test;
