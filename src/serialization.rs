use super::{
    abbreviate_name, format_name, has_eastern_name_order_formatter, try_abbreviate_name,
    FormatOptions, PersonName,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

/// An owned name, as read from JSON (`{"givenName": .., "familyName": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

impl NameRecord {
    pub fn from_json(json: &str) -> serde_json::Result<NameRecord> {
        serde_json::from_str(json)
    }

    pub fn as_person_name(&self) -> PersonName<'_> {
        PersonName::new(self.given_name.as_deref(), self.family_name.as_deref())
    }
}

/// Every display form of one name in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub abbreviation: Option<String>,
    pub display: String,
    pub short: String,
    pub full: String,
    pub eastern_name_order: bool,
}

impl Rendering {
    pub fn new(name: &PersonName<'_>, locale: &str, ideal_max_length: Option<usize>) -> Rendering {
        Rendering {
            abbreviation: try_abbreviate_name(name, ideal_max_length).map(|a| a.into_owned()),
            display: abbreviate_name(name, locale, ideal_max_length).into_owned(),
            short: format_name(name, locale, FormatOptions::default()).into_owned(),
            full: format_name(name, locale, FormatOptions::full()).into_owned(),
            eastern_name_order: has_eastern_name_order_formatter(locale),
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing plain strings and bools to a String can't fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for Rendering {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.abbreviation.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("Rendering", len)?;
        if let Some(ref abbreviation) = self.abbreviation {
            state.serialize_field("abbreviation", abbreviation)?;
        } else {
            state.skip_field("abbreviation")?;
        }
        state.serialize_field("display", &self.display)?;
        state.serialize_field("short", &self.short)?;
        state.serialize_field("full", &self.full)?;
        state.serialize_field("easternNameOrder", &self.eastern_name_order)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records() {
        let record = NameRecord::from_json(r#"{"givenName":"Michael","familyName":"Garfinkle"}"#).unwrap();
        assert_eq!(PersonName::new(Some("Michael"), Some("Garfinkle")), record.as_person_name());

        let record = NameRecord::from_json(r#"{"familyName":"山田"}"#).unwrap();
        assert_eq!(PersonName::new(None, Some("山田")), record.as_person_name());

        assert!(NameRecord::from_json("not json").is_err());
    }

    #[test]
    fn renders() {
        let name = PersonName::new(Some("太郎"), Some("山田"));
        let rendering = Rendering::new(&name, "ja", None);
        assert_eq!(
            r#"{"abbreviation":"山田","display":"山田","short":"山田様","full":"山田太郎","easternNameOrder":true}"#,
            rendering.to_json()
        );
    }

    #[test]
    fn omits_missing_abbreviation() {
        let name = PersonName::new(Some("Michael"), Some("van Finkle"));
        assert_eq!(
            r#"{"display":"Michael","short":"Michael","full":"Michael van Finkle","easternNameOrder":false}"#,
            Rendering::new(&name, "en", None).to_json()
        );
    }
}
