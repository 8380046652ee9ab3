mod administrator;
mod vehicle;
