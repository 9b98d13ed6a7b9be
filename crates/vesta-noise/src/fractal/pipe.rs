use crate::module::{Module1D, Module2D, Module3D, Module4D};

/// Single-octave passthrough: scales the input by `frequency` and samples
/// the primitive once.
#[derive(Clone, Debug, PartialEq)]
pub struct Pipe<P> {
    source: P,
    frequency: f32,
}

impl<P> Pipe<P> {
    pub const DEFAULT_FREQUENCY: f32 = 1.0;

    pub fn new(source: P) -> Self {
        Self::with_frequency(source, Self::DEFAULT_FREQUENCY)
    }

    pub fn with_frequency(source: P, frequency: f32) -> Self {
        Self { source, frequency }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn set_source(&mut self, source: P) {
        self.source = source;
    }
}

impl<P: Module1D> Module1D for Pipe<P> {
    fn get_1d(&self, x: f32) -> f32 {
        self.source.get_1d(x * self.frequency)
    }
}

impl<P: Module2D> Module2D for Pipe<P> {
    fn get_2d(&self, x: f32, y: f32) -> f32 {
        self.source.get_2d(x * self.frequency, y * self.frequency)
    }
}

impl<P: Module3D> Module3D for Pipe<P> {
    fn get_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let f = self.frequency;
        self.source.get_3d(x * f, y * f, z * f)
    }
}

impl<P: Module4D> Module4D for Pipe<P> {
    fn get_4d(&self, x: f32, y: f32, z: f32, t: f32) -> f32 {
        let f = self.frequency;
        self.source.get_4d(x * f, y * f, z * f, t * f)
    }
}
