pub mod elprisetjustnu;
