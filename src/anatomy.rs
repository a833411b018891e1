//! Anatomical region lookup over normalized scan coordinates.
//!
//! Maps a click position on a rendered axial MRI slice to one of seven
//! named regions via a 3×3 grid of coordinate thirds. Pure lookup: no
//! imaging data is consulted, which is exactly as much anatomy as a
//! 2D overlay can honestly claim.

use serde::Serialize;

/// A named brain region with a plain-language description of its function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrainRegion {
    pub name: &'static str,
    pub function: &'static str,
}

const FRONTAL_LOBE: BrainRegion = BrainRegion {
    name: "Frontal Lobe",
    function: "Controls motor function, problem solving, spontaneity, memory, language, initiation, judgement, impulse control, and social behavior",
};

const CENTRAL_PARIETAL: BrainRegion = BrainRegion {
    name: "Central/Parietal Region",
    function: "Processes sensory information, spatial awareness, and coordinates movement",
};

const TEMPORAL_LOBE: BrainRegion = BrainRegion {
    name: "Temporal Lobe",
    function: "Processes auditory information, memory formation, speech, and emotional responses",
};

const DEEP_BRAIN: BrainRegion = BrainRegion {
    name: "Deep Brain Structures",
    function: "Includes thalamus, basal ganglia - controls movement, emotions, and relays sensory information",
};

const BRAINSTEM: BrainRegion = BrainRegion {
    name: "Brainstem",
    function: "Controls vital functions like breathing, heart rate, blood pressure, and consciousness",
};

const CEREBELLUM: BrainRegion = BrainRegion {
    name: "Cerebellum",
    function: "Coordinates voluntary movements, balance, posture, and motor learning",
};

const OCCIPITAL_LOBE: BrainRegion = BrainRegion {
    name: "Occipital Lobe",
    function: "Primary visual processing center, interprets visual information from the eyes",
};

/// Identify the brain region at relative coordinates in [0,1]×[0,1]
/// (x: 0=left, 1=right; y: 0=top, 1=bottom).
///
/// Total over the whole plane: coordinates outside every band (including
/// NaN) land in the residual Occipital arm rather than panicking.
/// Bottom-row precedence: center wins over sides (Brainstem before
/// Cerebellum).
pub fn identify_region(rel_x: f32, rel_y: f32) -> BrainRegion {
    let left_third = rel_x < 0.33;
    let center_third = (0.33..0.67).contains(&rel_x);
    let right_third = rel_x >= 0.67;

    if rel_y < 0.33 {
        // Top row
        if left_third || right_third {
            FRONTAL_LOBE
        } else {
            CENTRAL_PARIETAL
        }
    } else if rel_y < 0.67 {
        // Middle row
        if left_third || right_third {
            TEMPORAL_LOBE
        } else {
            DEEP_BRAIN
        }
    } else if center_third {
        BRAINSTEM
    } else if left_third || right_third {
        CEREBELLUM
    } else {
        OCCIPITAL_LOBE
    }
}
