pub mod nws;
