//! Prompt text for the external generation service, kept as data separate
//! from the control flow that sends it.

use crate::anatomy::BrainRegion;
use crate::models::{AttentionLevel, Prediction, PredictionResult, TumorType};

/// Persona and task framing shared by the full-analysis prompt.
pub const ANALYSIS_ROLE: &str = "You are an expert medical AI assistant specializing in brain tumor analysis. Analyze the following MRI scan results and provide a comprehensive, professional medical explanation.";

/// Build the comprehensive-analysis prompt.
pub fn build_analysis_prompt(result: &PredictionResult) -> String {
    let mut scan_results = format!(
        r#"**Scan Results:**
- Detection: {}
- Confidence: {:.1}%
- Model: Deep Learning (EfficientNet-B4)
- Analysis Method: Grad-CAM attention mapping"#,
        result.prediction.detection_label(),
        result.confidence_pct(),
    );

    if let Some(tumor_type) = result.tumor_type {
        let type_confidence_pct = result.type_confidence.unwrap_or(0.0) * 100.0;
        scan_results.push_str(&format!(
            "\n- Tumor Type (Preliminary): {tumor_type} ({type_confidence_pct:.1}% confidence)"
        ));
    }

    let classification_line = match result.tumor_type {
        Some(tumor_type) => format!("- Classified as: {tumor_type}"),
        None => "- Analyze likely tumor type based on imaging:".to_string(),
    };

    format!(
        r#"{ANALYSIS_ROLE}

{scan_results}

**Generate a comprehensive medical analysis with these sections:**

1. **Executive Summary** (2-3 sentences)
   - State the finding clearly
   - Mention confidence level and tumor type if detected
   - Provide immediate recommendation

2. **Detailed Analysis**
   - Imaging patterns identified by the AI model
   - Key features that contributed to classification
   - Grad-CAM attention regions and their significance
   - Comparison with normal brain tissue patterns

3. **Tumor Classification** (if tumor detected)
   {classification_line}
   - Explain characteristics specific to this type
   - Confidence in classification
   - Distinguishing features
   - Common presentation and behavior

4. **Clinical Significance**
   - What these findings mean clinically
   - Potential impact on the patient
   - Urgency level (routine/urgent/emergency)

5. **Recommendations**
   - Next steps for diagnosis
   - Suggested imaging (contrast MRI, CT, etc.)
   - Specialist consultations needed
   - Timeline for follow-up

6. **Important Disclaimers**
   - This is an AI screening tool
   - Must be validated by qualified radiologists
   - Not a replacement for professional diagnosis
   - Part of clinical decision support

**Tone:** Professional, empathetic, medically accurate
**Format:** Use markdown with clear section headers
**Length:** Comprehensive but concise (400-500 words)

Generate the analysis now:"#
    )
}

/// Build the per-region explanation prompt.
///
/// The focus framing comes from the already-bucketed attention level, so
/// the prompt and the template fallback always describe the same level.
pub fn build_region_prompt(
    region: &BrainRegion,
    attention_level: AttentionLevel,
    attention_score: f32,
    prediction: Prediction,
    confidence: f32,
) -> String {
    format!(
        r#"You are a medical AI assistant explaining brain MRI analysis to patients.

**Brain Region Clicked:** {name}
**Region Function:** {function}
**Model Attention:** {attention_pct:.1}% (how intensely the AI focused on this area)
**Overall Diagnosis:** {prediction}
**Confidence:** {confidence_pct:.1}%

**Task:** In 3-4 sentences, explain:
1. What this brain region does (in simple terms)
2. Why the AI model {focus_phrase} this area
3. What this means for the diagnosis

**Tone:** Educational but accessible. Medical accuracy is important but avoid jargon.
**Format:** Plain text, conversational.

Generate explanation:"#,
        name = region.name,
        function = region.function,
        attention_pct = attention_score * 100.0,
        prediction = prediction,
        confidence_pct = confidence * 100.0,
        focus_phrase = attention_level.focus_phrase(),
    )
}

/// Build the differential-diagnosis prompt (JSON array requested).
pub fn build_differential_prompt(
    prediction: Prediction,
    confidence: f32,
    tumor_type: Option<TumorType>,
) -> String {
    let finding = match prediction {
        Prediction::Tumor => "Tumor detected",
        Prediction::NoTumor => "No significant abnormality detected",
    };
    let classification_line = match tumor_type {
        Some(tumor_type) => format!("- Preliminary Classification: {tumor_type}\n"),
        None => String::new(),
    };

    format!(
        r#"You are an expert neuroradiologist providing differential diagnosis for a brain MRI scan.

**Scan Analysis:**
- Primary Finding: {finding}
- Detection Confidence: {confidence_pct:.1}%
{classification_line}
**Task:** Generate a differential diagnosis list with 3-5 possible diagnoses ranked by likelihood.

**Format your response as a JSON array ONLY, for example:**
[
  {{
    "diagnosis": "Glioblastoma Multiforme",
    "likelihood": 75,
    "reasoning": "Most likely given infiltrative pattern and irregular borders on imaging.",
    "key_feature": "Aggressive growth pattern"
  }},
  {{
    "diagnosis": "Metastatic Tumor",
    "likelihood": 15,
    "reasoning": "Consider if patient has history of systemic cancer.",
    "key_feature": "Multiple lesions possible"
  }}
]

**Guidelines:**
- Likelihood percentages should sum to ~100%
- Primary diagnosis: 60-80%
- Secondary: 10-25%
- Tertiary and beyond: 5-15% each
- Include both common and rare but important considerations
- Be medically accurate

Generate ONLY the JSON array, no additional text:"#,
        confidence_pct = confidence * 100.0,
    )
}

/// Build the risk-assessment prompt (JSON object requested).
pub fn build_risk_prompt(
    prediction: Prediction,
    confidence: f32,
    tumor_type: Option<TumorType>,
) -> String {
    let finding = match prediction {
        Prediction::Tumor => "Tumor detected",
        Prediction::NoTumor => "No significant abnormality detected",
    };
    let type_line = match tumor_type {
        Some(tumor_type) => format!("- Tumor Type: {tumor_type}\n"),
        None => String::new(),
    };

    format!(
        r#"You are an expert medical AI providing risk assessment for a brain MRI scan.

**Scan Analysis:**
- Primary Finding: {finding}
- Detection Confidence: {confidence_pct:.1}%
{type_line}
**Task:** Generate a risk assessment with severity score, urgency level, and recommended timeline.

**Format your response as JSON ONLY:**
{{
  "severity_score": 8,
  "urgency_level": "urgent",
  "timeline": "Consult neurosurgeon within 24-48 hours",
  "reasoning": "High-grade tumor suspected with significant clinical implications"
}}

**Guidelines:**
- **severity_score**: 1-10 scale
  - 1-3: Low risk (benign/normal, routine follow-up)
  - 4-6: Moderate risk (monitoring needed, non-urgent)
  - 7-8: High risk (prompt specialist consultation)
  - 9-10: Critical risk (immediate emergency evaluation)

- **urgency_level**: Must be one of: "routine", "urgent", or "emergency"
  - routine: Normal findings or benign conditions
  - urgent: Concerning findings requiring prompt evaluation (24-48 hours)
  - emergency: Life-threatening findings requiring immediate action

- **timeline**: Specific actionable timeframe (e.g., "Schedule appointment within 2 weeks", "See specialist within 24 hours", "Go to ER immediately")

- **reasoning**: 1-2 sentence explanation of the risk level

Generate ONLY the JSON object, no additional text:"#,
        confidence_pct = confidence * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::identify_region;

    fn tumor_result() -> PredictionResult {
        PredictionResult::new(Prediction::Tumor, 0.943)
            .with_tumor_type(TumorType::Glioma, 0.816)
    }

    #[test]
    fn analysis_prompt_embeds_confidence_one_decimal() {
        let prompt = build_analysis_prompt(&tumor_result());
        assert!(prompt.contains("Confidence: 94.3%"));
        assert!(prompt.contains("Tumor detected"));
    }

    #[test]
    fn analysis_prompt_includes_tumor_type_when_present() {
        let prompt = build_analysis_prompt(&tumor_result());
        assert!(prompt.contains("Tumor Type (Preliminary): Glioma (81.6% confidence)"));
        assert!(prompt.contains("- Classified as: Glioma"));
    }

    #[test]
    fn analysis_prompt_omits_tumor_type_when_absent() {
        let prompt =
            build_analysis_prompt(&PredictionResult::new(Prediction::NoTumor, 0.88));
        assert!(!prompt.contains("Tumor Type (Preliminary)"));
        assert!(prompt.contains("- Analyze likely tumor type based on imaging:"));
    }

    #[test]
    fn analysis_prompt_requests_all_six_sections() {
        let prompt = build_analysis_prompt(&tumor_result());
        for section in [
            "Executive Summary",
            "Detailed Analysis",
            "Tumor Classification",
            "Clinical Significance",
            "Recommendations",
            "Important Disclaimers",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
    }

    #[test]
    fn region_prompt_frames_focus_from_bucket() {
        let region = identify_region(0.5, 0.8);
        let prompt = build_region_prompt(
            &region,
            AttentionLevel::from_score(0.72),
            0.72,
            Prediction::Tumor,
            0.91,
        );
        assert!(prompt.contains("Brainstem"));
        assert!(prompt.contains("Model Attention: 72.0%"));
        assert!(prompt.contains("focused heavily on"));
    }

    #[test]
    fn region_prompt_low_attention_phrase() {
        let region = identify_region(0.1, 0.1);
        let prompt = build_region_prompt(
            &region,
            AttentionLevel::from_score(0.1),
            0.1,
            Prediction::NoTumor,
            0.88,
        );
        assert!(prompt.contains("showed minimal focus on"));
    }

    #[test]
    fn differential_prompt_requests_json_array_and_bands() {
        let prompt = build_differential_prompt(Prediction::Tumor, 0.9, Some(TumorType::Glioma));
        assert!(prompt.contains("JSON array ONLY"));
        assert!(prompt.contains("Primary diagnosis: 60-80%"));
        assert!(prompt.contains("Preliminary Classification: Glioma"));
    }

    #[test]
    fn differential_prompt_no_classification_line_without_type() {
        let prompt = build_differential_prompt(Prediction::NoTumor, 0.85, None);
        assert!(!prompt.contains("Preliminary Classification"));
        assert!(prompt.contains("No significant abnormality detected"));
    }

    #[test]
    fn risk_prompt_carries_severity_guidance() {
        let prompt = build_risk_prompt(Prediction::Tumor, 0.9, Some(TumorType::Meningioma));
        assert!(prompt.contains("JSON ONLY"));
        assert!(prompt.contains("9-10: Critical risk"));
        assert!(prompt.contains("\"routine\", \"urgent\", or \"emergency\""));
        assert!(prompt.contains("Tumor Type: Meningioma"));
    }
}
