use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// A token could not be converted into the destination type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct ConversionError {
    /// The offending token.
    pub token: String,
    /// The destination type.
    pub type_name: &'static str,
}

/// A mutable binding to a caller-owned variable.
///
/// `Var` never owns the value; it borrows the variable for the duration of a single parse.
/// Use [`From`] to bind any of the supported types:
/// ```
/// # use argz_builder as argz;
/// use argz::Var;
/// use std::path::PathBuf;
///
/// let mut count: i32 = 0;
/// let mut output: Option<PathBuf> = None;
///
/// let mut var = Var::from(&mut count);
/// var.capture(Some("5")).unwrap();
/// let mut var = Var::from(&mut output);
/// var.capture(Some("out.txt")).unwrap();
///
/// assert_eq!(count, 5);
/// assert_eq!(output, Some(PathBuf::from("out.txt")));
/// ```
#[derive(Debug)]
pub enum Var<'a> {
    /// A switch; set to `true` when the flag is present.
    Bool(&'a mut bool),
    /// A 32-bit signed integer.
    I32(&'a mut i32),
    /// A 32-bit unsigned integer.
    U32(&'a mut u32),
    /// A 64-bit signed integer.
    I64(&'a mut i64),
    /// A 64-bit unsigned integer.
    U64(&'a mut u64),
    /// A double precision float.
    F64(&'a mut f64),
    /// Text, stored verbatim.
    Str(&'a mut String),
    /// A filesystem path.
    Path(&'a mut PathBuf),
    /// An optional 32-bit signed integer.
    OptI32(&'a mut Option<i32>),
    /// An optional 32-bit unsigned integer.
    OptU32(&'a mut Option<u32>),
    /// An optional 64-bit signed integer.
    OptI64(&'a mut Option<i64>),
    /// An optional 64-bit unsigned integer.
    OptU64(&'a mut Option<u64>),
    /// An optional double precision float.
    OptF64(&'a mut Option<f64>),
    /// Optional text.
    OptStr(&'a mut Option<String>),
    /// An optional filesystem path.
    OptPath(&'a mut Option<PathBuf>),
}

macro_rules! bind {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $t> for Var<'a> {
                fn from(value: &'a mut $t) -> Self {
                    Var::$variant(value)
                }
            }
        )*
    };
}

bind! {
    bool => Bool,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f64 => F64,
    String => Str,
    PathBuf => Path,
    Option<i32> => OptI32,
    Option<u32> => OptU32,
    Option<i64> => OptI64,
    Option<u64> => OptU64,
    Option<f64> => OptF64,
    Option<String> => OptStr,
    Option<PathBuf> => OptPath,
}

/// Conversion between a token and a single scalar destination type.
trait Scalar: Sized {
    fn convert(token: &str) -> Result<Self, ConversionError>;

    fn render(&self) -> String;
}

impl Scalar for bool {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        // Anything other than the exact text "true" is false.
        Ok(token == "true")
    }

    // Rendered as a number, "0" or "1".
    fn render(&self) -> String {
        u8::from(*self).to_string()
    }
}

impl Scalar for String {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(token.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl Scalar for PathBuf {
    fn convert(token: &str) -> Result<Self, ConversionError> {
        Ok(PathBuf::from(token))
    }

    fn render(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

// Numbers parse straight into the destination width, so an out of range token is an error rather than a truncation.
macro_rules! numeric {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn convert(token: &str) -> Result<Self, ConversionError> {
                    <$t>::from_str(token).map_err(|_| ConversionError {
                        token: token.to_string(),
                        type_name: std::any::type_name::<$t>(),
                    })
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric!(i32, u32, i64, u64, f64);

fn replace<T: Scalar>(variable: &mut T, token: &str) -> Result<(), ConversionError> {
    *variable = T::convert(token)?;
    Ok(())
}

fn emplace<T: Scalar>(variable: &mut Option<T>, token: &str) -> Result<(), ConversionError> {
    let value = T::convert(token)?;
    variable.replace(value);
    Ok(())
}

fn render_optional<T: Scalar>(variable: &Option<T>) -> String {
    match variable {
        Some(value) => value.render(),
        None => String::default(),
    }
}

impl<'a> Var<'a> {
    /// Convert the token into the bound variable's type and write it through.
    ///
    /// An absent token (`None`) leaves the variable untouched.
    /// Optional variables become `Some(..)` on success and are untouched on failure.
    ///
    /// ### Example
    /// ```
    /// # use argz_builder as argz;
    /// use argz::Var;
    ///
    /// let mut size: u32 = 1;
    /// let mut var = Var::from(&mut size);
    /// assert!(var.capture(Some("-1")).is_err());
    /// var.capture(None).unwrap();
    /// var.capture(Some("7")).unwrap();
    /// assert_eq!(size, 7);
    /// ```
    pub fn capture(&mut self, token: Option<&str>) -> Result<(), ConversionError> {
        let token = match token {
            Some(token) => token,
            None => return Ok(()),
        };

        match self {
            Var::Bool(variable) => replace(&mut **variable, token),
            Var::I32(variable) => replace(&mut **variable, token),
            Var::U32(variable) => replace(&mut **variable, token),
            Var::I64(variable) => replace(&mut **variable, token),
            Var::U64(variable) => replace(&mut **variable, token),
            Var::F64(variable) => replace(&mut **variable, token),
            Var::Str(variable) => replace(&mut **variable, token),
            Var::Path(variable) => replace(&mut **variable, token),
            Var::OptI32(variable) => emplace(&mut **variable, token),
            Var::OptU32(variable) => emplace(&mut **variable, token),
            Var::OptI64(variable) => emplace(&mut **variable, token),
            Var::OptU64(variable) => emplace(&mut **variable, token),
            Var::OptF64(variable) => emplace(&mut **variable, token),
            Var::OptStr(variable) => emplace(&mut **variable, token),
            Var::OptPath(variable) => emplace(&mut **variable, token),
        }
    }

    /// Render the bound variable's current value.
    ///
    /// An absent optional renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Var::Bool(variable) => variable.render(),
            Var::I32(variable) => variable.render(),
            Var::U32(variable) => variable.render(),
            Var::I64(variable) => variable.render(),
            Var::U64(variable) => variable.render(),
            Var::F64(variable) => variable.render(),
            Var::Str(variable) => variable.render(),
            Var::Path(variable) => variable.render(),
            Var::OptI32(variable) => render_optional(&**variable),
            Var::OptU32(variable) => render_optional(&**variable),
            Var::OptI64(variable) => render_optional(&**variable),
            Var::OptU64(variable) => render_optional(&**variable),
            Var::OptF64(variable) => render_optional(&**variable),
            Var::OptStr(variable) => render_optional(&**variable),
            Var::OptPath(variable) => render_optional(&**variable),
        }
    }

    /// Whether this is a switch (a plain `bool`), which takes no value on the Cli.
    pub fn is_switch(&self) -> bool {
        matches!(self, Var::Bool(_))
    }

    /// Set a switch to `true`.
    pub(crate) fn flip(&mut self) {
        if let Var::Bool(variable) = self {
            **variable = true;
        }
    }
}

impl<'a> std::fmt::Display for Var<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
