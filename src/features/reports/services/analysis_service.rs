//! Simulated AI analysis of uploaded medical reports.
//!
//! Keyword groups are matched against the lowercased report text; every
//! matching group contributes fixed findings, recommendations, and detected
//! conditions. Risk escalates highest-wins, so matching order cannot lower a
//! previously established level.

use std::time::Duration;

use crate::features::reports::models::{AnalysisResult, RiskLevel};

const BASE_CONFIDENCE: f64 = 0.85;

struct KeywordGroup {
    keywords: &'static [&'static str],
    findings: &'static [&'static str],
    recommendations: &'static [&'static str],
    conditions: &'static [&'static str],
    risk: Option<RiskLevel>,
    confidence: Option<f64>,
}

const KEYWORD_GROUPS: &[KeywordGroup] = &[
    // Respiratory symptoms
    KeywordGroup {
        keywords: &["asthma", "wheezing", "shortness of breath"],
        findings: &["Respiratory symptoms consistent with asthma detected"],
        recommendations: &[
            "Continue prescribed bronchodilator therapy",
            "Monitor peak flow readings daily",
            "Avoid known environmental triggers",
        ],
        conditions: &["Asthma"],
        risk: Some(RiskLevel::Moderate),
        confidence: Some(0.92),
    },
    // Allergic sensitization
    KeywordGroup {
        keywords: &["allergen", "allergy", "ige"],
        findings: &["Allergic sensitization patterns identified"],
        recommendations: &[
            "Consider comprehensive allergy testing",
            "Implement environmental control measures",
            "Discuss immunotherapy options with allergist",
        ],
        conditions: &["Allergic Rhinitis"],
        risk: None,
        confidence: None,
    },
    // Pulmonary function testing
    KeywordGroup {
        keywords: &["peak flow", "spirometry", "fev1"],
        findings: &["Pulmonary function testing results available"],
        recommendations: &[
            "Regular spirometry monitoring recommended",
            "Optimize bronchodilator therapy based on results",
        ],
        conditions: &[],
        risk: None,
        confidence: None,
    },
    // Inflammatory markers
    KeywordGroup {
        keywords: &["eosinophil", "inflammation"],
        findings: &["Inflammatory markers present"],
        recommendations: &[
            "Consider anti-inflammatory treatment",
            "Monitor inflammatory biomarkers",
        ],
        conditions: &[],
        risk: Some(RiskLevel::Moderate),
        confidence: None,
    },
    // Severe exacerbation history
    KeywordGroup {
        keywords: &["severe", "emergency", "hospitalization"],
        findings: &["History of severe asthma exacerbations"],
        recommendations: &[
            "Develop comprehensive asthma action plan",
            "Consider step-up therapy",
            "Regular specialist follow-up recommended",
        ],
        conditions: &[],
        risk: Some(RiskLevel::High),
        confidence: Some(0.95),
    },
    // Environmental air quality
    KeywordGroup {
        keywords: &["pollution", "pm2.5", "air quality"],
        findings: &["Environmental air quality concerns noted"],
        recommendations: &[
            "Use air quality monitoring apps",
            "Consider air purifiers for indoor spaces",
            "Limit outdoor activities during high pollution days",
        ],
        conditions: &[],
        risk: None,
        confidence: None,
    },
];

const FALLBACK_FINDING: &str = "General health parameters reviewed";
const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Continue regular medical follow-up",
    "Maintain healthy lifestyle practices",
    "Monitor symptoms and seek care if worsening",
];

/// Keyword-matched analysis over the report text. Pure function of its input.
pub fn analyze_text(report_text: &str) -> AnalysisResult {
    let keywords = report_text.to_lowercase();

    let mut findings = Vec::new();
    let mut recommendations = Vec::new();
    let mut detected_conditions = Vec::new();
    let mut risk_level = RiskLevel::Low;
    let mut confidence = BASE_CONFIDENCE;

    for group in KEYWORD_GROUPS {
        if !group.keywords.iter().any(|k| keywords.contains(k)) {
            continue;
        }

        findings.extend(group.findings.iter().map(|s| s.to_string()));
        recommendations.extend(group.recommendations.iter().map(|s| s.to_string()));
        detected_conditions.extend(group.conditions.iter().map(|s| s.to_string()));

        if let Some(risk) = group.risk {
            risk_level = risk_level.max(risk);
        }
        if let Some(c) = group.confidence {
            confidence = confidence.max(c);
        }
    }

    if findings.is_empty() {
        findings.push(FALLBACK_FINDING.to_string());
        recommendations.extend(FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }

    AnalysisResult {
        summary: "Medical report analysis completed successfully.".to_string(),
        findings,
        recommendations,
        detected_conditions,
        risk_level,
        confidence,
    }
}

/// Service wrapping the analyzer with configurable simulated latency
pub struct AnalysisService {
    delay: Duration,
}

impl AnalysisService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn analyze(&self, report_text: &str) -> AnalysisResult {
        tokio::time::sleep(self.delay).await;
        analyze_text(report_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asthma_keywords_yield_moderate_risk() {
        let result = analyze_text("Patient presents with asthma and wheezing at night");

        assert!(result
            .findings
            .iter()
            .any(|f| f.contains("consistent with asthma")));
        assert!(result.detected_conditions.contains(&"Asthma".to_string()));
        assert!(result.risk_level >= RiskLevel::Moderate);
        assert_eq!(result.confidence, 0.92);
    }

    #[test]
    fn test_severity_outranks_moderate_regardless_of_order() {
        // Severity keyword after a moderate one
        let a = analyze_text("asthma symptoms, later hospitalization required");
        assert_eq!(a.risk_level, RiskLevel::High);
        assert_eq!(a.confidence, 0.95);

        // Severity keyword before a moderate one
        let b = analyze_text("severe exacerbation with ongoing inflammation");
        assert_eq!(b.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_unmatched_text_gets_generic_fallback() {
        let result = analyze_text("routine annual checkup, no complaints");

        assert_eq!(result.findings, vec![FALLBACK_FINDING.to_string()]);
        assert_eq!(result.recommendations.len(), FALLBACK_RECOMMENDATIONS.len());
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.confidence, BASE_CONFIDENCE);
        assert!(result.detected_conditions.is_empty());
    }

    #[test]
    fn test_multiple_groups_accumulate() {
        let result = analyze_text("asthma with allergy, spirometry and pollution exposure");

        assert_eq!(result.findings.len(), 4);
        assert!(result
            .detected_conditions
            .contains(&"Allergic Rhinitis".to_string()));
        assert_eq!(result.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyze_text("ASTHMA FOLLOW-UP");
        assert!(result.detected_conditions.contains(&"Asthma".to_string()));
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        for text in ["", "asthma", "severe asthma emergency", "inflammation"] {
            let result = analyze_text(text);
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
