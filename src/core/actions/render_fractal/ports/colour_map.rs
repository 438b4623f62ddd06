use crate::core::data::colour::Rgb;

pub trait ColourMap {
    fn map(&self, iterations: u32) -> Rgb;
}
