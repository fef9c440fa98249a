//! User-facing text in each supported language

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "th")]
    Thai,
}

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "th" | "thai" => Some(Locale::Thai),
            _ => None,
        }
    }
}

/// Every fixed string the interface shows
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_heading: &'static str,
    pub drop_prompt: &'static str,
    pub drop_release: &'static str,
    pub supported_types: &'static str,
    pub preview_heading: &'static str,
    pub analyze_heading: &'static str,
    pub analyze_button: &'static str,
    pub analyzing_button: &'static str,
    pub loading_message: &'static str,
    pub error_heading: &'static str,
    pub result_heading: &'static str,
    pub completed_at: &'static str,
    pub ready_line_1: &'static str,
    pub ready_line_2: &'static str,
    pub picker_title: &'static str,
    pub picker_filter: &'static str,
    pub footer: &'static str,
    no_image: &'static str,
    analysis_error: &'static str,
    unsupported_image: &'static str,
    unknown_error: &'static str,
}

const ENGLISH: Strings = Strings {
    title: "Electrical Equipment Hotspot Analyzer",
    subtitle: "Upload a thermal image and let AI find the spots that may be a problem",
    upload_heading: "1. Upload a thermal image",
    drop_prompt: "Click to choose a file, or drop it here",
    drop_release: "Release to use this file",
    supported_types: "PNG, JPG and WEBP files are supported",
    preview_heading: "Preview:",
    analyze_heading: "2. Start the analysis",
    analyze_button: "Analyze image",
    analyzing_button: "Analyzing...",
    loading_message: "Processing the image with AI...",
    error_heading: "Something went wrong!",
    result_heading: "Analysis result:",
    completed_at: "Completed at",
    ready_line_1: "Your image is ready",
    ready_line_2: "Click \"Analyze image\" to start",
    picker_title: "Select a thermal image",
    picker_filter: "Thermal images",
    footer: "Powered by Google Gemini API",
    no_image: "Please select an image first",
    analysis_error: "Analysis failed",
    unsupported_image: "Unsupported file, please choose a PNG, JPG or WEBP image",
    unknown_error: "An unknown error occurred",
};

const THAI: Strings = Strings {
    title: "เครื่องมือวิเคราะห์จุดร้อนอุปกรณ์ไฟฟ้า",
    subtitle: "อัพโหลดภาพถ่ายความร้อน (Thermal Image) เพื่อให้ AI ช่วยค้นหาจุดที่อาจเป็นปัญหา",
    upload_heading: "1. อัพโหลดภาพถ่ายความร้อน",
    drop_prompt: "คลิกเพื่อเลือกไฟล์ หรือลากมาวางที่นี่",
    drop_release: "ปล่อยเพื่อใช้ไฟล์นี้",
    supported_types: "รองรับไฟล์ PNG, JPG, WEBP",
    preview_heading: "ภาพตัวอย่าง:",
    analyze_heading: "2. เริ่มการวิเคราะห์",
    analyze_button: "วิเคราะห์ภาพ",
    analyzing_button: "กำลังวิเคราะห์...",
    loading_message: "กำลังประมวลผลภาพด้วย AI...",
    error_heading: "เกิดข้อผิดพลาด!",
    result_heading: "ผลการวิเคราะห์:",
    completed_at: "วิเคราะห์เสร็จเมื่อ",
    ready_line_1: "ภาพของคุณพร้อมแล้ว",
    ready_line_2: "คลิก \"วิเคราะห์ภาพ\" เพื่อเริ่มการประมวลผล",
    picker_title: "เลือกภาพถ่ายความร้อน",
    picker_filter: "ภาพถ่ายความร้อน",
    footer: "Powered by Google Gemini API",
    no_image: "กรุณาเลือกรูปภาพก่อน",
    analysis_error: "เกิดข้อผิดพลาดในการวิเคราะห์",
    unsupported_image: "ไฟล์ไม่รองรับ กรุณาเลือกไฟล์ PNG, JPG หรือ WEBP",
    unknown_error: "เกิดข้อผิดพลาดที่ไม่รู้จัก",
};

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Thai => &THAI,
        }
    }

    /// Message for the error panel. Never empty.
    pub fn error_message(&self, err: &AnalysisError) -> String {
        match err {
            AnalysisError::NoImageSelected => self.no_image.to_string(),
            AnalysisError::UnsupportedImage(name) => format!("{} ({})", self.unsupported_image, name),
            AnalysisError::Read(_) | AnalysisError::AnalysisFailed(_) => match err.detail() {
                Some(detail) if !detail.is_empty() => format!("{}: {}", self.analysis_error, detail),
                _ => self.analysis_error.to_string(),
            },
            AnalysisError::Unknown => self.unknown_error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_errors() -> Vec<AnalysisError> {
        vec![
            AnalysisError::NoImageSelected,
            AnalysisError::UnsupportedImage("notes.txt".into()),
            AnalysisError::Read("disk gone".into()),
            AnalysisError::AnalysisFailed(String::new()),
            AnalysisError::Unknown,
        ]
    }

    #[test]
    fn test_error_messages_never_empty() {
        for locale in [Locale::English, Locale::Thai] {
            let strings = Strings::for_locale(locale);
            for err in all_errors() {
                assert!(!strings.error_message(&err).trim().is_empty(), "{:?} {:?}", locale, err);
            }
        }
    }

    #[test]
    fn test_failure_message_carries_detail() {
        let strings = Strings::for_locale(Locale::English);
        let message = strings.error_message(&AnalysisError::AnalysisFailed("connection reset".into()));
        assert_eq!(message, "Analysis failed: connection reset");

        let strings = Strings::for_locale(Locale::Thai);
        let message = strings.error_message(&AnalysisError::Read("permission denied".into()));
        assert_eq!(message, "เกิดข้อผิดพลาดในการวิเคราะห์: permission denied");
    }

    #[test]
    fn test_validation_message() {
        let strings = Strings::for_locale(Locale::Thai);
        assert_eq!(strings.error_message(&AnalysisError::NoImageSelected), "กรุณาเลือกรูปภาพก่อน");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("TH"), Some(Locale::Thai));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(serde_json::to_string(&Locale::Thai).unwrap(), "\"th\"");
    }
}
