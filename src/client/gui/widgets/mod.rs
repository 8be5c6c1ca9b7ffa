pub mod information_data;
