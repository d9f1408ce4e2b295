mod common;
mod evaluator;
mod pool;
