//! Response synthesis.
//!
//! `format_service` is a pure function from (record, intent, language) to
//! the factual text block: deterministic, no randomness. Decorative
//! wrapping happens afterwards in `wrapper`. Dispatch is an exhaustive
//! match on `Intent`, so adding a variant without a rendering branch is a
//! compile error.

use seva_agent_core::{Intent, Language, ServiceRecord};
use seva_agent_config::{TemplateKind, TemplatesConfig};

pub struct ResponseSynthesizer {
    templates: TemplatesConfig,
}

impl ResponseSynthesizer {
    pub fn new(templates: TemplatesConfig) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &TemplatesConfig {
        &self.templates
    }

    /// Render the factual block for a resolved service.
    pub fn format_service(
        &self,
        record: &ServiceRecord,
        intent: Intent,
        language: Language,
    ) -> String {
        let is_tamil = language.is_tamil();
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("📋 {}", record.name(language)));
        lines.push(String::new());

        match intent {
            Intent::Download => {
                if is_tamil {
                    lines.push("💻 ஆன்லைனில் டவுன்லோட் செய்வது எப்படி:".to_string());
                    lines.push(format!("  1. {} வலைதளத்திற்கு செல்லவும்", record.url));
                    lines.push("  2. உங்கள் விண்ணப்ப எண் மற்றும் விவரங்களை உள்ளிடவும்".to_string());
                    lines.push("  3. 'பதிவிறக்கம்' பொத்தானை கிளிக் செய்யவும்".to_string());
                    lines.push("  4. PDF ஐப் பதிவிறக்கம் செய்து அச்சிடவும்".to_string());
                    lines.push(String::new());
                    lines.push(
                        "⚠️ குறிப்பு: ஏற்கனவே வழங்கப்பட்ட சான்றிதழ்களை மட்டுமே டவுன்லோட் செய்ய முடியும்"
                            .to_string(),
                    );
                } else {
                    lines.push("💻 How to Download Online:".to_string());
                    lines.push(format!("  1. Visit {}", record.url));
                    lines.push("  2. Enter your application number and details".to_string());
                    lines.push("  3. Click 'Download' button".to_string());
                    lines.push("  4. Download PDF and print".to_string());
                    lines.push(String::new());
                    lines.push(
                        "⚠️ Note: Only previously issued certificates can be downloaded".to_string(),
                    );
                }
            },
            Intent::Reissue => {
                if is_tamil {
                    lines.push("🔄 நகல் சான்றிதழ் பெறுவது எப்படி:".to_string());
                    lines.push(
                        "  1. அருகிலுள்ள இ-சேவை மையம் அல்லது தாலுக்கா அலுவலகத்திற்கு செல்லவும்"
                            .to_string(),
                    );
                    lines.push("  2. 'நகல் சான்றிதழ்' விண்ணப்பத்தைப் பூர்த்தி செய்யவும்".to_string());
                    lines.push("  3. அசல் சான்றிதழின் நகல் அல்லது எண்ணை வழங்கவும்".to_string());
                    lines.push("  4. அடையாள சான்று சமர்ப்பிக்கவும்".to_string());
                    lines.push("  5. கட்டணம் செலுத்தவும்".to_string());
                    lines.push(String::new());
                    lines.push(format!("💰 கட்டணம்: {}", record.fees_ta));
                } else {
                    lines.push("🔄 How to Get Duplicate Certificate:".to_string());
                    lines.push("  1. Visit nearest e-Sevai center or Taluk office".to_string());
                    lines.push("  2. Fill 'Duplicate Certificate' application".to_string());
                    lines.push("  3. Provide original certificate copy or number".to_string());
                    lines.push("  4. Submit ID proof".to_string());
                    lines.push("  5. Pay fees".to_string());
                    lines.push(String::new());
                    lines.push(format!("💰 Fees: {}", record.fees));
                }
            },
            Intent::Correction => {
                if is_tamil {
                    lines.push("✏️ தவறுகளைத் திருத்துவது எப்படி:".to_string());
                    lines.push("  1. அசல் சான்றிதழுடன் தாலுக்கா அலுவலகத்திற்கு செல்லவும்".to_string());
                    lines.push("  2. 'திருத்தம்' விண்ணப்பத்தை பூர்த்தி செய்யவும்".to_string());
                    lines.push("  3. திருத்தத்திற்கான ஆதார ஆவணங்களை இணைக்கவும்".to_string());
                    lines.push(
                        "  4. சரிபார்ப்புக்குப் பிறகு திருத்தப்பட்ட சான்றிதழ் வழங்கப்படும்".to_string(),
                    );
                } else {
                    lines.push("✏️ How to Make Corrections:".to_string());
                    lines.push("  1. Visit Taluk office with original certificate".to_string());
                    lines.push("  2. Fill 'Correction' application form".to_string());
                    lines.push("  3. Attach supporting documents for correction".to_string());
                    lines.push("  4. Corrected certificate issued after verification".to_string());
                }
            },
            Intent::Renewal => {
                if is_tamil {
                    lines.push("🔄 புதுப்பிப்பது எப்படி:".to_string());
                    lines.push("  1. இ-சேவை மையம் அல்லது ஆன்லைனில் விண்ணப்பிக்கவும்".to_string());
                    lines.push("  2. அசல் சான்றிதழின் நகலை இணைக்கவும்".to_string());
                    lines.push("  3. புதுப்பிக்கப்பட்ட தகவல்கள்/ஆவணங்களை சமர்ப்பிக்கவும்".to_string());
                    lines.push("  4. கட்டணம் செலுத்தவும்".to_string());
                } else {
                    lines.push("🔄 How to Renew:".to_string());
                    lines.push("  1. Apply at e-Sevai center or online".to_string());
                    lines.push("  2. Attach copy of original certificate".to_string());
                    lines.push("  3. Submit updated information/documents".to_string());
                    lines.push("  4. Pay renewal fees".to_string());
                }
            },
            Intent::Status => {
                if is_tamil {
                    lines.push("📊 நிலையைச் சரிபார்ப்பது எப்படி:".to_string());
                    lines.push(format!(
                        "  1. {} இல் 'விண்ணப்ப நிலை' பிரிவுக்கு செல்லவும்",
                        record.url
                    ));
                    lines.push("  2. உங்கள் விண்ணப்ப எண்ணை உள்ளிடவும்".to_string());
                    lines.push("  3. மொபைல் எண் அல்லது ஆதார் எண்ணைச் சரிபார்க்கவும்".to_string());
                    lines.push("  4. தற்போதைய நிலையைக் காணவும்".to_string());
                    lines.push(String::new());
                    lines.push(format!("📞 SMS வழி நிலை: {} க்கு அழைக்கவும்", record.contact));
                } else {
                    lines.push("📊 How to Check Status:".to_string());
                    lines.push(format!(
                        "  1. Go to 'Application Status' section on {}",
                        record.url
                    ));
                    lines.push("  2. Enter your application number".to_string());
                    lines.push("  3. Verify with mobile or Aadhaar number".to_string());
                    lines.push("  4. View current status".to_string());
                    lines.push(String::new());
                    lines.push(format!("📞 Status via SMS: Call {}", record.contact));
                }
            },
            Intent::Documents => {
                push_requirements(&mut lines, record, language);
            },
            Intent::Apply | Intent::Procedure => {
                push_procedure(&mut lines, record, language);
            },
            Intent::Fees => {
                push_fees(&mut lines, record, language);
            },
            Intent::Contact => {
                if is_tamil {
                    lines.push("📞 தொடர்பு தகவல்:".to_string());
                    lines.push(format!("  உதவி எண்: {}", record.contact));
                    lines.push(format!("  வலைதளம்: {}", record.url));
                    lines.push(format!("  துறை: {}", record.department_ta));
                } else {
                    lines.push("📞 Contact Information:".to_string());
                    lines.push(format!("  Helpline: {}", record.contact));
                    lines.push(format!("  Website: {}", record.url));
                    lines.push(format!("  Department: {}", record.department));
                }
            },
            Intent::Eligibility | Intent::GeneralInquiry => {
                lines.push(record.description(language).to_string());
                lines.push(String::new());
                push_requirements(&mut lines, record, language);
                lines.push(String::new());
                push_procedure(&mut lines, record, language);
                lines.push(String::new());
                push_fees(&mut lines, record, language);
            },
        }

        // Contact footer on every branch
        lines.push(String::new());
        if is_tamil {
            lines.push(format!("📞 தொடர்பு: {}", record.contact));
            lines.push(format!("🌐 வலைதளம்: {}", record.url));
        } else {
            lines.push(format!("📞 Contact: {}", record.contact));
            lines.push(format!("🌐 Website: {}", record.url));
        }

        lines.join("\n")
    }

    /// Follow-up detail about the stored service: a step-by-step procedure
    /// for procedure-like intents, the full summary otherwise. Also pure.
    pub fn follow_up_detail(
        &self,
        record: &ServiceRecord,
        intent: Intent,
        language: Language,
    ) -> String {
        if intent == Intent::Procedure {
            let mut lines: Vec<String> = Vec::new();
            if language.is_tamil() {
                lines.push(format!(
                    "நிச்சயமாக! {} க்கான விரிவான செயல்முறை:",
                    record.name_ta
                ));
                lines.push("\n📝 படிப்படியான வழிமுறைகள்:".to_string());
            } else {
                lines.push(format!(
                    "Sure! Here's the detailed procedure for {}:",
                    record.name_en
                ));
                lines.push("\n📝 Step-by-step process:".to_string());
            }
            for (i, step) in record.procedure_steps(language).iter().enumerate() {
                lines.push(format!("\n{}. {}", i + 1, step));
            }
            let mut text = lines.join("");
            if language.is_tamil() {
                text.push_str("\n\nவேறு ஏதாவது தெரிந்து கொள்ள வேண்டுமா? 😊");
            } else {
                text.push_str("\n\nWould you like to know anything else? 😊");
            }
            text
        } else {
            self.format_service(record, Intent::GeneralInquiry, language)
        }
    }

    /// No-results fallback: known service categories plus the helpline.
    pub fn no_results(&self, language: Language) -> String {
        self.templates.get(TemplateKind::NoResults, language).to_string()
    }
}

fn push_requirements(lines: &mut Vec<String>, record: &ServiceRecord, language: Language) {
    if language.is_tamil() {
        lines.push("📑 தேவையான ஆவணங்கள்:".to_string());
    } else {
        lines.push("📑 Required Documents:".to_string());
    }
    for requirement in record.requirement_list(language) {
        lines.push(format!("  • {requirement}"));
    }
}

fn push_procedure(lines: &mut Vec<String>, record: &ServiceRecord, language: Language) {
    if language.is_tamil() {
        lines.push("📝 விண்ணப்பிக்கும் முறை:".to_string());
    } else {
        lines.push("📝 Application Procedure:".to_string());
    }
    for (i, step) in record.procedure_steps(language).iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, step));
    }
}

fn push_fees(lines: &mut Vec<String>, record: &ServiceRecord, language: Language) {
    if language.is_tamil() {
        lines.push(format!("💰 கட்டணம்: {}", record.fees_ta));
    } else {
        lines.push(format!("💰 Fees: {}", record.fees));
    }
    if let Some(time) = &record.processing_time {
        if language.is_tamil() {
            lines.push(format!("⏱️ செயலாக்க நேரம்: {time}"));
        } else {
            lines.push(format!("⏱️ Processing Time: {time}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ServiceRecord {
        ServiceRecord {
            id: "income_certificate".to_string(),
            name_en: "Income Certificate".to_string(),
            name_ta: "வருமான சான்றிதழ்".to_string(),
            description_en: "Certificate stating the annual income of an individual or family"
                .to_string(),
            description_ta: "ஒரு நபர் அல்லது குடும்பத்தின் ஆண்டு வருமானத்தை குறிக்கும் சான்றிதழ்"
                .to_string(),
            department: "Revenue Department".to_string(),
            department_ta: "வருவாய் துறை".to_string(),
            requirements: vec![
                "Aadhaar card".to_string(),
                "Ration card".to_string(),
                "Salary certificate or income proof".to_string(),
                "Address proof".to_string(),
            ],
            requirements_ta: vec![
                "ஆதார் அட்டை".to_string(),
                "ரேஷன் அட்டை".to_string(),
                "சம்பள சான்றிதழ் அல்லது வருமான சான்று".to_string(),
                "முகவரி சான்று".to_string(),
            ],
            procedure: vec![
                "Visit Taluk office or e-Sevai center".to_string(),
                "Fill application form".to_string(),
                "Submit required documents".to_string(),
            ],
            procedure_ta: vec![
                "தாலுக்கா அலுவலகம் அல்லது இ-சேவை மையத்தை பார்வையிடவும்".to_string(),
                "விண்ணப்ப படிவத்தை நிரப்பவும்".to_string(),
                "தேவையான ஆவணங்களை சமர்ப்பிக்கவும்".to_string(),
            ],
            fees: "₹10".to_string(),
            fees_ta: "₹10".to_string(),
            processing_time: Some("7-15 days".to_string()),
            contact: "1800-425-1000".to_string(),
            url: "https://www.tnedistrict.gov.in".to_string(),
        }
    }

    fn synthesizer() -> ResponseSynthesizer {
        ResponseSynthesizer::new(TemplatesConfig::default())
    }

    #[test]
    fn test_documents_intent_lists_every_requirement() {
        let text = synthesizer().format_service(&record(), Intent::Documents, Language::English);
        assert!(text.contains("Required Documents"));
        for requirement in record().requirements {
            assert!(text.contains(&requirement), "missing: {requirement}");
        }
        // Footer is always present
        assert!(text.contains("Contact: 1800-425-1000"));
        assert!(text.contains("Website: https://www.tnedistrict.gov.in"));
    }

    #[test]
    fn test_documents_intent_tamil() {
        let text = synthesizer().format_service(&record(), Intent::Documents, Language::Tamil);
        assert!(text.contains("தேவையான ஆவணங்கள்"));
        assert!(text.contains("ஆதார் அட்டை"));
        assert!(text.contains("வருமான சான்றிதழ்"));
        assert!(!text.contains("Required Documents"));
    }

    #[test]
    fn test_procedure_intent_numbers_steps() {
        let text = synthesizer().format_service(&record(), Intent::Apply, Language::English);
        assert!(text.contains("Application Procedure"));
        assert!(text.contains("1. Visit Taluk office"));
        assert!(text.contains("3. Submit required documents"));
    }

    #[test]
    fn test_fees_intent_includes_processing_time() {
        let text = synthesizer().format_service(&record(), Intent::Fees, Language::English);
        assert!(text.contains("Fees: ₹10"));
        assert!(text.contains("Processing Time: 7-15 days"));
    }

    #[test]
    fn test_fees_intent_without_processing_time() {
        let mut r = record();
        r.processing_time = None;
        let text = synthesizer().format_service(&r, Intent::Fees, Language::English);
        assert!(!text.contains("Processing Time"));
    }

    #[test]
    fn test_download_intent_mentions_url() {
        let text = synthesizer().format_service(&record(), Intent::Download, Language::English);
        assert!(text.contains("How to Download Online"));
        assert!(text.contains("Visit https://www.tnedistrict.gov.in"));
    }

    #[test]
    fn test_general_inquiry_is_full_summary() {
        let text =
            synthesizer().format_service(&record(), Intent::GeneralInquiry, Language::English);
        assert!(text.contains("annual income"));
        assert!(text.contains("Required Documents"));
        assert!(text.contains("Application Procedure"));
        assert!(text.contains("Fees: ₹10"));
    }

    #[test]
    fn test_factual_block_is_deterministic() {
        let s = synthesizer();
        let a = s.format_service(&record(), Intent::Documents, Language::English);
        let b = s.format_service(&record(), Intent::Documents, Language::English);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_language_renders_english() {
        let text = synthesizer().format_service(&record(), Intent::Fees, Language::Unknown);
        assert!(text.contains("Fees: ₹10"));
        assert!(!text.contains("கட்டணம்"));
    }

    #[test]
    fn test_follow_up_detail_procedure() {
        let text = synthesizer().follow_up_detail(&record(), Intent::Procedure, Language::English);
        assert!(text.contains("detailed procedure for Income Certificate"));
        assert!(text.contains("1. Visit Taluk office"));
        assert!(text.contains("anything else"));
    }

    #[test]
    fn test_follow_up_detail_general_falls_back_to_summary() {
        let text =
            synthesizer().follow_up_detail(&record(), Intent::GeneralInquiry, Language::English);
        assert!(text.contains("Required Documents"));
    }
}
