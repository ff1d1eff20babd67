use crate::error::FieldCoercionWarning;
use log::debug;

/// Number of positional slots packed into a series description
pub const AUXILIARY_SLOTS: usize = 11;

/// Token used to fill slots missing from a short description
pub const PLACEHOLDER: &str = "null";

/// Auxiliary series attributes packed into the description text
///
/// The description is a comma-separated record with a fixed layout:
///
/// | index | slot                      | kept as |
/// |-------|---------------------------|---------|
/// | 0     | screening year            | text    |
/// | 1     | image type                | text    |
/// | 2     | unused                    | text    |
/// | 3     | manufacturer model name   | text    |
/// | 4     | convolution kernel        | text    |
/// | 5     | reconstruction diameter   | number  |
/// | 6     | slice thickness           | number  |
/// | 7     | kVp                       | number  |
/// | 8     | mAs                       | number  |
/// | 9     | effective mAs             | number  |
/// | 10    | pitch                     | number  |
///
/// Short descriptions are padded with [`PLACEHOLDER`]; tokens past index 10
/// are ignored. Text slots keep the raw token (placeholder included).
/// Numeric slots that do not parse are `None`.
///
/// # Example
///
/// ```
/// use nlstdb_core::AuxiliaryFields;
///
/// let fields = AuxiliaryFields::decode("1999,CT,,LightSpeed,STANDARD,350,2.5,120,40,,1.5");
/// assert_eq!(fields.screening_year, "1999");
/// assert_eq!(fields.convolution_kernel, "STANDARD");
/// assert_eq!(fields.kvp, Some(120.0));
/// assert_eq!(fields.effective_mas, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryFields {
    pub screening_year: String,
    pub image_type: String,
    pub unused: String,
    /// Only consulted when the series carries no model name of its own
    pub model_name: String,
    pub convolution_kernel: String,
    pub reconstruction_diameter: Option<f64>,
    pub slice_thickness: Option<f64>,
    pub kvp: Option<f64>,
    pub mas: Option<f64>,
    pub effective_mas: Option<f64>,
    pub pitch: Option<f64>,
}

impl AuxiliaryFields {
    /// Decodes a description, dropping any coercion warnings
    pub fn decode(description: &str) -> Self {
        Self::decode_with_warnings(description).0
    }

    /// Decodes a description and reports each numeric token that did not parse
    pub fn decode_with_warnings(description: &str) -> (Self, Vec<FieldCoercionWarning>) {
        let tokens = pad_tokens(description);
        let mut warnings = Vec::new();

        let mut real = |slot: &'static str, index: usize| match try_coerce_real(slot, tokens[index])
        {
            Ok(value) => value,
            Err(warning) => {
                debug!("{}", warning);
                warnings.push(warning);
                None
            }
        };

        let reconstruction_diameter = real("reconstruction_diameter", 5);
        let slice_thickness = real("slice_thickness", 6);
        let kvp = real("kvp", 7);
        let mas = real("mas", 8);
        let effective_mas = real("effective_mas", 9);
        let pitch = real("pitch", 10);

        let fields = Self {
            screening_year: tokens[0].to_string(),
            image_type: tokens[1].to_string(),
            unused: tokens[2].to_string(),
            model_name: tokens[3].to_string(),
            convolution_kernel: tokens[4].to_string(),
            reconstruction_diameter,
            slice_thickness,
            kvp,
            mas,
            effective_mas,
            pitch,
        };

        (fields, warnings)
    }
}

/// Splits a description on `,` and pads it to [`AUXILIARY_SLOTS`] tokens
///
/// Never truncates: a longer description keeps all of its tokens.
pub fn pad_tokens(description: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = description.split(',').collect();
    if tokens.len() < AUXILIARY_SLOTS {
        tokens.resize(AUXILIARY_SLOTS, PLACEHOLDER);
    }
    tokens
}

/// Reads a numeric slot token, falling back to `None` on any failure
pub fn coerce_real(token: &str) -> Option<f64> {
    try_coerce_real("auxiliary", token).ok().flatten()
}

/// Reads a numeric slot token
///
/// Placeholder and blank tokens are simply absent. Anything else that does
/// not parse yields a [`FieldCoercionWarning`].
fn try_coerce_real(
    slot: &'static str,
    token: &str,
) -> std::result::Result<Option<f64>, FieldCoercionWarning> {
    let trimmed = token.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| FieldCoercionWarning {
            slot,
            token: token.to_string(),
        })
}
