//! Deterministic fallbacks for every generation operation.
//!
//! These are the guarantee behind the generator's infallible surface: a
//! fixed-structure narrative, a one-sentence region explanation, and
//! pre-authored differential/risk tables keyed on the detection outcome
//! and tumor subtype. Same inputs, same bytes, every time.

use crate::anatomy::BrainRegion;
use crate::models::{
    AttentionLevel, DifferentialEntry, Prediction, PredictionResult, RiskAssessment, TumorType,
    UrgencyLevel,
};

/// Six-section narrative switched on the detection outcome only.
pub fn analysis_narrative(result: &PredictionResult) -> String {
    let confidence_pct = result.confidence_pct();

    match result.prediction {
        Prediction::Tumor => format!(
            r#"**Executive Summary**

The AI model has detected potential tumor presence with {confidence_pct:.1}% confidence. This finding requires immediate medical evaluation and confirmatory imaging.

**Detailed Analysis**

The deep learning model analyzed the MRI scan through multiple convolutional layers, identifying patterns associated with abnormal tissue growth. Key indicators include irregular tissue density distributions, asymmetric structural patterns, and texture heterogeneity suggesting cellular abnormalities.

**Grad-CAM Interpretation**

The attention heatmap highlights regions where the model detected strongest anomalous patterns. Red and yellow areas indicate high-attention zones that contributed most to the tumor classification.

**Clinical Significance**

These findings suggest the presence of a space-occupying lesion requiring urgent evaluation. The confidence level indicates clear pattern recognition by the AI system.

**Recommendations**

- Immediate consultation with a neurologist or neuro-oncologist
- Additional imaging: Contrast-enhanced MRI, CT scan
- Consider biopsy for definitive diagnosis
- Timeline: Urgent evaluation within 24-48 hours

**Important Notice**

This AI analysis is a screening tool and must be validated by qualified medical professionals. All findings should be confirmed through comprehensive diagnostic procedures."#
        ),
        Prediction::NoTumor => format!(
            r#"**Executive Summary**

The AI model did not identify significant tumor indicators in this scan ({confidence_pct:.1}% confidence). However, clinical correlation is essential.

**Detailed Analysis**

The neural network processed the MRI scan and found tissue density, structural symmetry, and texture patterns consistent with healthy brain anatomy. No significant deviations from normal were detected across multiple analytical layers.

**Grad-CAM Interpretation**

The attention map shows distributed focus without concentrated hotspots, indicating no specific regions triggered tumor-associated patterns.

**Clinical Significance**

While encouraging, this result should be interpreted within the full clinical context including symptoms, history, and physical examination.

**Recommendations**

- Continue routine health monitoring
- Report any neurological symptoms to your healthcare provider
- Follow recommended screening schedule
- Maintain healthy lifestyle practices

**Important Notice**

This AI screening does not replace regular medical checkups. Always consult healthcare professionals for comprehensive neurological assessment and personalized medical advice."#
        ),
    }
}

/// One-sentence region explanation using the shared attention bucket.
pub fn region_explanation(
    region: &BrainRegion,
    attention_level: AttentionLevel,
    prediction: Prediction,
    confidence: f32,
) -> String {
    format!(
        "The {} shows {} attention from the AI model. This region is responsible for {}. The model's focus here contributes to the overall {} prediction with {:.1}% confidence.",
        region.name,
        attention_level,
        region.function.to_lowercase(),
        prediction,
        confidence * 100.0,
    )
}

/// Pre-authored differential tables. Likelihoods in every table sum to
/// exactly 100.
pub fn differential_table(
    prediction: Prediction,
    tumor_type: Option<TumorType>,
) -> Vec<DifferentialEntry> {
    match (prediction, tumor_type) {
        (Prediction::Tumor, Some(TumorType::Glioma)) => vec![
            DifferentialEntry::new(
                "Glioblastoma",
                70,
                "Most aggressive glioma type, common in adults",
                "Infiltrative growth",
            ),
            DifferentialEntry::new(
                "Anaplastic Astrocytoma",
                20,
                "High-grade glioma, less aggressive than GBM",
                "Grade III malignancy",
            ),
            DifferentialEntry::new(
                "Metastatic Tumor",
                10,
                "Rule out metastasis from systemic cancer",
                "History dependent",
            ),
        ],
        (Prediction::Tumor, Some(TumorType::Meningioma)) => vec![
            DifferentialEntry::new(
                "Benign Meningioma",
                85,
                "Most common, slow-growing, good prognosis",
                "Dura attachment",
            ),
            DifferentialEntry::new(
                "Atypical Meningioma",
                12,
                "Grade II, higher recurrence risk",
                "Increased mitoses",
            ),
            DifferentialEntry::new(
                "Hemangiopericytoma",
                3,
                "Rare dural-based tumor",
                "Aggressive behavior",
            ),
        ],
        (Prediction::Tumor, _) => vec![
            DifferentialEntry::new(
                "Primary Brain Tumor",
                60,
                "Imaging consistent with primary CNS neoplasm",
                "Intrinsic to brain",
            ),
            DifferentialEntry::new(
                "Metastatic Disease",
                25,
                "Consider systemic malignancy",
                "Multiple possible",
            ),
            DifferentialEntry::new(
                "Abscess",
                10,
                "Infectious etiology to consider",
                "Ring enhancement",
            ),
            DifferentialEntry::new(
                "Demyelinating Lesion",
                5,
                "MS or other demyelinating process",
                "Periventricular",
            ),
        ],
        (Prediction::NoTumor, _) => vec![
            DifferentialEntry::new(
                "Normal Anatomy",
                80,
                "No significant abnormality detected",
                "Healthy tissue",
            ),
            DifferentialEntry::new(
                "Age-Related Changes",
                12,
                "Expected involutional changes",
                "Non-pathologic",
            ),
            DifferentialEntry::new(
                "White Matter Changes",
                5,
                "Chronic small vessel disease",
                "Vascular etiology",
            ),
            DifferentialEntry::new(
                "Artifact",
                3,
                "Motion or technical artifact",
                "Non-diagnostic",
            ),
        ],
    }
}

/// Pre-authored risk assessments keyed on outcome and subtype.
pub fn risk_table(prediction: Prediction, tumor_type: Option<TumorType>) -> RiskAssessment {
    match (prediction, tumor_type) {
        (Prediction::Tumor, Some(TumorType::Glioma)) => RiskAssessment::new(
            8,
            UrgencyLevel::Urgent,
            "Consult neurosurgeon within 24-48 hours",
            "High-grade glioma suspected; requires prompt specialist evaluation and treatment planning",
        ),
        (Prediction::Tumor, Some(TumorType::Meningioma)) => RiskAssessment::new(
            5,
            UrgencyLevel::Routine,
            "Schedule neurosurgeon consultation within 1-2 weeks",
            "Meningioma typically slow-growing; planned evaluation and monitoring appropriate",
        ),
        (Prediction::Tumor, _) => RiskAssessment::new(
            7,
            UrgencyLevel::Urgent,
            "See specialist within 48-72 hours",
            "Brain tumor detected; requires timely medical evaluation for diagnosis and treatment planning",
        ),
        (Prediction::NoTumor, _) => RiskAssessment::new(
            2,
            UrgencyLevel::Routine,
            "Continue routine health monitoring",
            "No significant abnormalities detected; routine follow-up care recommended",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::identify_region;

    #[test]
    fn tumor_narrative_has_six_sections_and_confidence() {
        let result = PredictionResult::new(Prediction::Tumor, 0.947);
        let narrative = analysis_narrative(&result);
        for header in [
            "**Executive Summary**",
            "**Detailed Analysis**",
            "**Grad-CAM Interpretation**",
            "**Clinical Significance**",
            "**Recommendations**",
            "**Important Notice**",
        ] {
            assert!(narrative.contains(header), "missing header: {header}");
        }
        assert!(narrative.contains("94.7%"));
    }

    #[test]
    fn no_tumor_narrative_switches_content() {
        let result = PredictionResult::new(Prediction::NoTumor, 0.88);
        let narrative = analysis_narrative(&result);
        assert!(narrative.contains("did not identify significant tumor indicators"));
        assert!(narrative.contains("88.0%"));
        assert!(!narrative.contains("space-occupying lesion"));
    }

    #[test]
    fn narrative_ignores_subtype_fields() {
        // The template switches on prediction only.
        let bare = PredictionResult::new(Prediction::Tumor, 0.9);
        let typed = PredictionResult::new(Prediction::Tumor, 0.9)
            .with_tumor_type(TumorType::Glioma, 0.8);
        assert_eq!(analysis_narrative(&bare), analysis_narrative(&typed));
    }

    #[test]
    fn region_explanation_names_bucket_and_function() {
        let region = identify_region(0.5, 0.8);
        let text =
            region_explanation(&region, AttentionLevel::High, Prediction::Tumor, 0.912);
        assert!(text.contains("The Brainstem shows high attention"));
        assert!(text.contains("controls vital functions"));
        assert!(text.contains("tumor prediction with 91.2% confidence"));
    }

    #[test]
    fn differential_tables_sum_to_exactly_100() {
        let cases = [
            (Prediction::Tumor, Some(TumorType::Glioma)),
            (Prediction::Tumor, Some(TumorType::Meningioma)),
            (Prediction::Tumor, None),
            (Prediction::NoTumor, None),
        ];
        for (prediction, tumor_type) in cases {
            let total: u32 = differential_table(prediction, tumor_type)
                .iter()
                .map(|e| e.likelihood as u32)
                .sum();
            assert_eq!(total, 100, "{prediction:?}/{tumor_type:?}");
        }
    }

    #[test]
    fn differential_tables_have_three_to_four_entries() {
        assert_eq!(
            differential_table(Prediction::Tumor, Some(TumorType::Glioma)).len(),
            3
        );
        assert_eq!(differential_table(Prediction::Tumor, None).len(), 4);
        assert_eq!(differential_table(Prediction::NoTumor, None).len(), 4);
    }

    #[test]
    fn pituitary_subtype_uses_generic_tumor_table() {
        let entries =
            differential_table(Prediction::Tumor, Some(TumorType::PituitaryAdenoma));
        assert_eq!(entries[0].diagnosis, "Primary Brain Tumor");
    }

    #[test]
    fn glioma_risk_is_severity_eight_urgent() {
        let risk = risk_table(Prediction::Tumor, Some(TumorType::Glioma));
        assert_eq!(risk.severity_score, 8);
        assert_eq!(risk.urgency_level, UrgencyLevel::Urgent);
        assert!(risk.timeline.contains("24-48 hours"));
    }

    #[test]
    fn risk_table_covers_all_keys() {
        assert_eq!(
            risk_table(Prediction::Tumor, Some(TumorType::Meningioma)).severity_score,
            5
        );
        assert_eq!(risk_table(Prediction::Tumor, None).severity_score, 7);
        assert_eq!(risk_table(Prediction::NoTumor, None).severity_score, 2);
        assert_eq!(
            risk_table(Prediction::NoTumor, Some(TumorType::Glioma)).severity_score,
            2
        );
    }
}
