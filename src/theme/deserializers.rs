use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.len() == 0 {
                return Err(D::Error::custom("a font family list can't be empty."));
            }

            Ok(vec)
        }
    }
}

pub fn de_font_sizes<'de, D>(deserializer: D) -> Result<[String; 6], D::Error>
where
    D: Deserializer<'de>,
{
    let sizes = Vec::<String>::deserialize(deserializer)?;

    match <[String; 6]>::try_from(sizes) {
        Ok(sizes) => Ok(sizes),
        Err(sizes) => Err(D::Error::custom(format!(
            "a font size scale needs exactly 6 entries, got {}.",
            sizes.len()
        ))),
    }
}

pub fn de_size_index<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let index = u8::deserialize(deserializer)?;

    if !(1..=6).contains(&index) {
        return Err(D::Error::custom(
            "a default size needs to be between 1 and 6.",
        ));
    }

    Ok(index)
}
