// Application layer: drivers that sit on top of the core pipeline.

pub mod interactive;
