//! The interpolation channel exposed to animation drivers

/// A value with exactly one interpolatable scalar.
///
/// Drivers read the current value, compute the next frame's value and write
/// it back. Nothing else about the implementor may change through this
/// channel.
pub trait Animatable {
    fn animatable_data(&self) -> f32;

    fn set_animatable_data(&mut self, value: f32);
}

impl Animatable for f32 {
    fn animatable_data(&self) -> f32 {
        *self
    }

    fn set_animatable_data(&mut self, value: f32) {
        *self = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_channel() {
        let mut value = 1.0f32;
        value.set_animatable_data(3.5);
        assert_eq!(value.animatable_data(), 3.5);
    }
}
