use std::{fmt, str::FromStr};

use pixgrid_image::{ChannelDtype, Image, ImageError};

use crate::{color, edges, flip, rotate, threshold};

/// Errors that can occur while parsing a [`Transform`] from a string.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformParseError {
    /// The operation name is not known.
    #[error("unknown transform: {0}")]
    UnknownTransform(String),

    /// The operation requires a parameter that was not given.
    #[error("transform {0} requires a threshold, e.g. {0}:100")]
    MissingThreshold(String),

    /// The operation does not take a parameter but one was given.
    #[error("transform {0} does not take a parameter")]
    UnexpectedParameter(String),

    /// The parameter could not be parsed as a number.
    #[error("invalid threshold for {0}: {1}")]
    InvalidThreshold(String, String),
}

/// A single transform to apply to an image, as selected by a caller.
///
/// The string form is the operation name, followed by `:<threshold>` for the
/// operations that take one, e.g. `threshold:100` or `edge-detect:42.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", rename_all = "kebab-case")
)]
pub enum Transform {
    /// See [`color::grayscale`].
    Grayscale,
    /// See [`threshold::threshold_binary`].
    Threshold {
        /// The per-channel cutoff, must satisfy `0 < threshold < depth`.
        threshold: u64,
    },
    /// See [`flip::horizontal_flip`].
    FlipHorizontal,
    /// See [`flip::vertical_flip`].
    FlipVertical,
    /// See [`edges::edge_detect`].
    EdgeDetect {
        /// The RGB distance above which a neighbour difference is an edge.
        threshold: f64,
    },
    /// See [`rotate::rotate_right90`].
    #[cfg_attr(feature = "serde", serde(rename = "rotate-right"))]
    RotateRight90,
    /// See [`rotate::rotate_left90`].
    #[cfg_attr(feature = "serde", serde(rename = "rotate-left"))]
    RotateLeft90,
}

impl Transform {
    /// Apply the transform to an image, returning a new image.
    ///
    /// # Errors
    ///
    /// Forwards the error of the selected operation. A threshold that does not
    /// fit the channel type is reported as [`ImageError::InvalidThreshold`].
    ///
    /// # Example
    ///
    /// ```
    /// use pixgrid_image::{Image, ImageSize};
    /// use pixgrid_imgproc::transform::Transform;
    ///
    /// let image = Image::<u8>::from_size_val(
    ///     ImageSize { width: 3, height: 2 },
    ///     255,
    ///     [25, 75, 250],
    /// )
    /// .unwrap();
    ///
    /// let transform: Transform = "rotate-right".parse().unwrap();
    /// let rotated = transform.apply(&image).unwrap();
    /// assert_eq!(rotated.size(), ImageSize { width: 2, height: 3 });
    /// ```
    pub fn apply<T: ChannelDtype>(&self, src: &Image<T>) -> Result<Image<T>, ImageError> {
        match *self {
            Transform::Grayscale => color::grayscale(src),
            Transform::Threshold { threshold: value } => {
                let cutoff = T::from(value).ok_or(ImageError::InvalidThreshold(
                    value as f64,
                    src.depth().to_wide() as f64,
                ))?;
                threshold::threshold_binary(src, cutoff)
            }
            Transform::FlipHorizontal => flip::horizontal_flip(src),
            Transform::FlipVertical => flip::vertical_flip(src),
            Transform::EdgeDetect { threshold } => edges::edge_detect(src, threshold),
            Transform::RotateRight90 => rotate::rotate_right90(src),
            Transform::RotateLeft90 => rotate::rotate_left90(src),
        }
    }

    /// The operation name used in the string form.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::Threshold { .. } => "threshold",
            Transform::FlipHorizontal => "flip-horizontal",
            Transform::FlipVertical => "flip-vertical",
            Transform::EdgeDetect { .. } => "edge-detect",
            Transform::RotateRight90 => "rotate-right",
            Transform::RotateLeft90 => "rotate-left",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Threshold { threshold } => write!(f, "{}:{}", self.name(), threshold),
            Transform::EdgeDetect { threshold } => write!(f, "{}:{}", self.name(), threshold),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Transform {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.trim().split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s.trim(), None),
        };

        let invalid = |param: &str| {
            TransformParseError::InvalidThreshold(name.to_string(), param.to_string())
        };

        let transform = match (name, param) {
            ("threshold", Some(p)) => Transform::Threshold {
                threshold: p.parse().map_err(|_| invalid(p))?,
            },
            ("edge-detect", Some(p)) => Transform::EdgeDetect {
                threshold: p.parse().map_err(|_| invalid(p))?,
            },
            ("threshold" | "edge-detect", None) => {
                return Err(TransformParseError::MissingThreshold(name.to_string()))
            }
            (_, param) => {
                let transform = match name {
                    "grayscale" => Transform::Grayscale,
                    "flip-horizontal" => Transform::FlipHorizontal,
                    "flip-vertical" => Transform::FlipVertical,
                    "rotate-right" => Transform::RotateRight90,
                    "rotate-left" => Transform::RotateLeft90,
                    _ => return Err(TransformParseError::UnknownTransform(name.to_string())),
                };
                if param.is_some() {
                    return Err(TransformParseError::UnexpectedParameter(name.to_string()));
                }
                transform
            }
        };

        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::{Transform, TransformParseError};
    use pixgrid_image::{Image, ImageError, ImageSize};

    #[test]
    fn parse_transforms() -> Result<(), TransformParseError> {
        assert_eq!("grayscale".parse::<Transform>()?, Transform::Grayscale);
        assert_eq!(
            "threshold:100".parse::<Transform>()?,
            Transform::Threshold { threshold: 100 }
        );
        assert_eq!(
            " edge-detect: 42.5 ".parse::<Transform>()?,
            Transform::EdgeDetect { threshold: 42.5 }
        );
        assert_eq!(
            "flip-horizontal".parse::<Transform>()?,
            Transform::FlipHorizontal
        );
        assert_eq!("flip-vertical".parse::<Transform>()?, Transform::FlipVertical);
        assert_eq!("rotate-right".parse::<Transform>()?, Transform::RotateRight90);
        assert_eq!("rotate-left".parse::<Transform>()?, Transform::RotateLeft90);
        Ok(())
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "blur".parse::<Transform>(),
            Err(TransformParseError::UnknownTransform("blur".to_string()))
        );
        assert_eq!(
            "threshold".parse::<Transform>(),
            Err(TransformParseError::MissingThreshold("threshold".to_string()))
        );
        assert_eq!(
            "threshold:abc".parse::<Transform>(),
            Err(TransformParseError::InvalidThreshold(
                "threshold".to_string(),
                "abc".to_string()
            ))
        );
        assert_eq!(
            "grayscale:3".parse::<Transform>(),
            Err(TransformParseError::UnexpectedParameter(
                "grayscale".to_string()
            ))
        );
    }

    #[test]
    fn display_roundtrip() -> Result<(), TransformParseError> {
        for transform in [
            Transform::Grayscale,
            Transform::Threshold { threshold: 7 },
            Transform::EdgeDetect { threshold: 12.5 },
            Transform::RotateLeft90,
        ] {
            assert_eq!(transform.to_string().parse::<Transform>()?, transform);
        }
        Ok(())
    }

    #[test]
    fn apply_dispatch() -> Result<(), ImageError> {
        let image = Image::<u8>::from_rows(
            255,
            vec![
                vec![[80, 120, 160], [0, 0, 0]],
                vec![[255, 255, 255], [10, 20, 30]],
            ],
        )?;

        assert_eq!(
            Transform::Grayscale.apply(&image)?,
            crate::color::grayscale(&image)?
        );
        assert_eq!(
            Transform::Threshold { threshold: 100 }.apply(&image)?,
            crate::threshold::threshold_binary(&image, 100)?
        );
        assert_eq!(
            Transform::EdgeDetect { threshold: 10.0 }.apply(&image)?.size(),
            ImageSize {
                width: 1,
                height: 1
            }
        );
        assert_eq!(
            Transform::FlipHorizontal.apply(&image)?.get_pixel(0, 0)?,
            [0, 0, 0]
        );
        assert_eq!(
            Transform::FlipVertical.apply(&image)?.get_pixel(0, 0)?,
            [255, 255, 255]
        );
        assert_eq!(
            Transform::RotateRight90.apply(&image)?.get_pixel(0, 0)?,
            [255, 255, 255]
        );
        assert_eq!(
            Transform::RotateLeft90.apply(&image)?.get_pixel(0, 0)?,
            [0, 0, 0]
        );

        Ok(())
    }

    #[test]
    fn apply_threshold_too_large() -> Result<(), ImageError> {
        let image = Image::<u8>::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            255,
            [0, 0, 0],
        )?;
        assert_eq!(
            Transform::Threshold { threshold: 300 }.apply(&image),
            Err(ImageError::InvalidThreshold(300.0, 255.0))
        );
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_config() -> Result<(), serde_json::Error> {
        let transforms: Vec<Transform> = serde_json::from_str(
            r#"[{"op":"grayscale"},{"op":"threshold","threshold":100},{"op":"edge-detect","threshold":30.0}]"#,
        )?;
        assert_eq!(
            transforms,
            vec![
                Transform::Grayscale,
                Transform::Threshold { threshold: 100 },
                Transform::EdgeDetect { threshold: 30.0 },
            ]
        );
        Ok(())
    }
}
