pub mod errors;
pub mod generate_fractal;
pub mod generate_fractal_parallel_rayon;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;
