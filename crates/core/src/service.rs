//! Canonical bilingual description of one government service.

use serde::{Deserialize, Serialize};

use crate::Language;

/// One government service record.
///
/// Every displayed field has both a Tamil and an English rendering; records
/// missing either side of a required pair are rejected at load time as
/// malformed. Read-only to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique key, e.g. "income_certificate"
    pub id: String,
    pub name_en: String,
    pub name_ta: String,
    pub description_en: String,
    pub description_ta: String,
    pub department: String,
    pub department_ta: String,
    /// Ordered list of required documents
    pub requirements: Vec<String>,
    pub requirements_ta: Vec<String>,
    /// Ordered application steps
    pub procedure: Vec<String>,
    pub procedure_ta: Vec<String>,
    pub fees: String,
    pub fees_ta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    pub contact: String,
    pub url: String,
}

impl ServiceRecord {
    pub fn name(&self, language: Language) -> &str {
        if language.is_tamil() {
            &self.name_ta
        } else {
            &self.name_en
        }
    }

    pub fn description(&self, language: Language) -> &str {
        if language.is_tamil() {
            &self.description_ta
        } else {
            &self.description_en
        }
    }

    pub fn department_name(&self, language: Language) -> &str {
        if language.is_tamil() {
            &self.department_ta
        } else {
            &self.department
        }
    }

    pub fn requirement_list(&self, language: Language) -> &[String] {
        if language.is_tamil() {
            &self.requirements_ta
        } else {
            &self.requirements
        }
    }

    pub fn procedure_steps(&self, language: Language) -> &[String] {
        if language.is_tamil() {
            &self.procedure_ta
        } else {
            &self.procedure
        }
    }

    pub fn fee_text(&self, language: Language) -> &str {
        if language.is_tamil() {
            &self.fees_ta
        } else {
            &self.fees
        }
    }

    /// Text embedded for retrieval: both names and both descriptions, so a
    /// query in either language lands on the same document.
    pub fn embedding_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name_en, self.name_ta, self.description_en, self.description_ta
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServiceRecord {
        ServiceRecord {
            id: "birth_certificate".to_string(),
            name_en: "Birth Certificate".to_string(),
            name_ta: "பிறப்பு சான்றிதழ்".to_string(),
            description_en: "Official document certifying the birth of a person".to_string(),
            description_ta: "ஒரு நபரின் பிறப்பை சான்றளிக்கும் அதிகாரப்பூர்வ ஆவணம்".to_string(),
            department: "Revenue Department".to_string(),
            department_ta: "வருவாய் துறை".to_string(),
            requirements: vec!["Hospital birth certificate or declaration".to_string()],
            requirements_ta: vec!["மருத்துவமனை பிறப்பு சான்றிதழ் அல்லது அறிவிப்பு".to_string()],
            procedure: vec!["Visit e-Sevai center or apply online".to_string()],
            procedure_ta: vec!["இ-சேவை மையத்தை பார்வையிடவும்".to_string()],
            fees: "Free".to_string(),
            fees_ta: "இலவசம்".to_string(),
            processing_time: None,
            contact: "1800-425-1000".to_string(),
            url: "https://www.tnedistrict.gov.in".to_string(),
        }
    }

    #[test]
    fn test_bilingual_accessors() {
        let record = sample();
        assert_eq!(record.name(Language::English), "Birth Certificate");
        assert_eq!(record.name(Language::Tamil), "பிறப்பு சான்றிதழ்");
        // Unknown renders in English
        assert_eq!(record.name(Language::Unknown), "Birth Certificate");
        assert_eq!(record.fee_text(Language::Tamil), "இலவசம்");
    }

    #[test]
    fn test_embedding_text_is_bilingual() {
        let record = sample();
        let text = record.embedding_text();
        assert!(text.contains("Birth Certificate"));
        assert!(text.contains("பிறப்பு சான்றிதழ்"));
        assert!(text.contains("certifying the birth"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ServiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
