// THEORY:
// The `Pixel` module is the most fundamental unit of the quantizer. It is a
// "dumb" data container for a single RGBA sample and nothing else.
//
// Key principles:
// 1) No algorithm state: cluster membership is NOT stored here. The Lloyd
//    iterator keeps it in a parallel array of indices into its means, so a
//    `Pixel` stays a plain color value that can be copied freely.
// 2) Visibility is the only rule a pixel knows about itself. A pixel whose
//    alpha is zero is "transparent": it is never clustered, never averaged,
//    and is written back untouched.
// 3) Byte conversions mirror the flat RGBA8 layout used by the image codecs.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;
    pub const OPAQUE: Channel = Channel::MAX;

    /// A single RGBA sample.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// A fully opaque pixel of the given color.
        pub const fn opaque(red: Channel, green: Channel, blue: Channel) -> Self {
            Self::new(red, green, blue, OPAQUE)
        }

        /// Visible pixels take part in clustering; transparent ones (alpha == 0) never do.
        #[inline]
        pub fn is_visible(&self) -> bool {
            self.alpha != 0
        }

        /// True when the red, green and blue channels match, whatever the alpha.
        #[inline]
        pub fn same_color(&self, other: &Pixel) -> bool {
            self.red == other.red && self.green == other.green && self.blue == other.blue
        }
    }

    impl From<[Byte; CHANNELS]> for Pixel {
        fn from(bytes: [Byte; CHANNELS]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for [Byte; CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}
