//! Per-frame processing

use feedback::PoseQualityAnalyzer;
use landmarks::{classify, Landmark, Orientation};
use metrics::counter;
use pose_catalog::{reference, PoseName};
use recognizer::{Breakdown, Confidence, PoseRecognizer};
use tracing::{debug, info};

use crate::report::{FrameReport, FrameRequest, NO_POSE_DETECTED};
use crate::EngineConfig;

/// Feedback for a frame without a body
pub const NO_PERSON: &str = "No person detected in frame";

/// Feedback when the target pose scored zero
pub const POSE_NOT_DETECTED: &str =
    "Unable to detect pose. Please ensure you're visible in the camera and try the pose again.";

/// Recognizer plus analyzer for one or more frame streams
#[derive(Clone, Default)]
pub struct FramePipeline {
    recognizer: PoseRecognizer,
    analyzer: PoseQualityAnalyzer,
}

impl FramePipeline {
    pub fn new(config: &EngineConfig) -> Self {
        info!("Creating frame pipeline with scoring {:?}", config.scoring);
        Self {
            recognizer: PoseRecognizer::new(config.scoring),
            analyzer: PoseQualityAnalyzer::new(),
        }
    }

    /// Process a frame, stamped with the current time
    pub fn process(&self, request: FrameRequest) -> FrameReport {
        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.process_at(request, timestamp_ms)
    }

    /// Process a frame with an explicit timestamp
    pub fn process_at(&self, request: FrameRequest, timestamp_ms: u64) -> FrameReport {
        counter!("pose_frames_processed_total").increment(1);

        let target = request.target().map(str::to_owned);
        let landmarks = request.landmarks;

        if landmarks.is_empty() {
            counter!("pose_frames_without_body_total").increment(1);
            debug!("Frame at {} has no landmarks", timestamp_ms);
            return FrameReport {
                landmarks,
                pose_name: target.unwrap_or_else(|| NO_POSE_DETECTED.to_string()),
                confidence: Some(0.0),
                feedback: vec![NO_PERSON.to_string()],
                breakdown: Breakdown::new(),
                orientation: Orientation::Front,
                orientation_valid: true,
                timestamp_ms,
            };
        }

        match target {
            Some(target) => self.evaluate(landmarks, target, timestamp_ms),
            None => self.recognize(landmarks, timestamp_ms),
        }
    }

    fn evaluate(&self, landmarks: Vec<Landmark>, target: String, timestamp_ms: u64) -> FrameReport {
        let evaluation = self.recognizer.evaluate_against(&landmarks, &target);

        // Only catalog poses can be gated by orientation or score above zero
        let feedback = match (evaluation.confidence, target.parse::<PoseName>()) {
            (Confidence::NotApplicable, Ok(pose)) => {
                counter!("pose_orientation_rejections_total").increment(1);
                vec![reposition_message(pose)]
            }
            (Confidence::Scored(score), Ok(pose)) if score > 0.0 => {
                self.analyzer.analyze(pose.as_str(), &landmarks)
            }
            _ => vec![POSE_NOT_DETECTED.to_string()],
        };

        debug!(
            "Evaluated {} from {} view: {:?}",
            target, evaluation.orientation, evaluation.confidence
        );

        FrameReport {
            landmarks,
            pose_name: target,
            confidence: evaluation.confidence.value(),
            feedback,
            breakdown: evaluation.breakdown,
            orientation: evaluation.orientation,
            orientation_valid: evaluation.orientation_valid,
            timestamp_ms,
        }
    }

    fn recognize(&self, landmarks: Vec<Landmark>, timestamp_ms: u64) -> FrameReport {
        let recognition = self.recognizer.recognize(&landmarks);

        let feedback = match recognition.pose {
            Some(pose) => self.analyzer.analyze(pose.as_str(), &landmarks),
            None => Vec::new(),
        };

        FrameReport {
            pose_name: recognition.label().to_string(),
            confidence: Some(recognition.confidence),
            feedback,
            breakdown: Breakdown::new(),
            orientation: classify(&landmarks),
            orientation_valid: true,
            landmarks,
            timestamp_ms,
        }
    }
}

/// Readable name for a camera view
fn view_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Front => "front-facing",
        Orientation::SideLeft => "left side",
        Orientation::SideRight => "right side",
        Orientation::Supine => "lying down",
    }
}

/// Ask the user to turn to a view the target pose can be scored from
fn reposition_message(pose: PoseName) -> String {
    let views = reference(pose)
        .orientations
        .iter()
        .map(|&o| view_name(o))
        .collect::<Vec<_>>()
        .join(" or ");
    format!("Please reposition for {pose} - use a {views} view to the camera")
}
