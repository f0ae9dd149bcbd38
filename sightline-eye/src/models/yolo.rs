//! YOLO object detection backend
//!
//! Runs a YOLOv8 ONNX model through `ort`. The output head is
//! `[1, 4 + classes, anchors]`: four box coordinates (center x/y, width,
//! height, in input-pixel units) followed by one score per class. Some
//! exports transpose the last two axes; both layouts are handled.

use crate::config::VisionConfig;
use crate::detector::ObjectDetector;
use crate::error::VisionError;
use crate::frame::Frame;
use crate::labels;
use ndarray::{Array4, ArrayViewD};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use parking_lot::Mutex;
use sightline_core::Detection;
use std::path::Path;
use tracing::{debug, info};

/// YOLO model for object detection
pub struct YoloDetector {
    session: Mutex<Session>,
    input_name: String,
    input_size: u32,
    confidence_threshold: f32,
    iou_threshold: f32,
}

impl YoloDetector {
    /// Load a YOLO model from an ONNX file.
    pub fn new(model_path: &Path, config: &VisionConfig) -> Result<Self, VisionError> {
        config.validate().map_err(VisionError::Config)?;

        if !model_path.exists() {
            return Err(VisionError::Model(format!(
                "Model file not found: {}",
                model_path.display()
            )));
        }

        let session = Session::builder()?
            .with_execution_providers([CPUExecutionProvider::default().build()])?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(2)?
            .commit_from_file(model_path)?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .unwrap_or_else(|| "images".to_string());

        info!("YOLO model loaded from {}", model_path.display());

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            input_size: config.input_size,
            confidence_threshold: config.confidence_threshold,
            iou_threshold: config.iou_threshold,
        })
    }

    /// Resize to the model input square, normalize to [0, 1], CHW layout.
    fn preprocess(&self, frame: &Frame) -> Array4<f32> {
        let size = self.input_size;
        let resized = image::imageops::resize(
            frame.as_rgb(),
            size,
            size,
            image::imageops::FilterType::Triangle,
        );

        let mut input = Array4::<f32>::zeros((1, 3, size as usize, size as usize));
        for (x, y, pixel) in resized.enumerate_pixels() {
            for c in 0..3 {
                input[[0, c, y as usize, x as usize]] = f32::from(pixel.0[c]) / 255.0;
            }
        }
        input
    }
}

impl ObjectDetector for YoloDetector {
    fn detect(&self, frame: &Frame) -> Result<Vec<Detection>, VisionError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(VisionError::Frame("Empty frame".to_string()));
        }

        debug!(
            "Running YOLO detection on {}x{} frame",
            frame.width(),
            frame.height()
        );

        let input = self.preprocess(frame);
        let input_value = Value::from_array(input)?;

        let mut session = self.session.lock();
        let outputs = session.run(ort::inputs![&self.input_name => input_value])?;
        let output = outputs[0].try_extract_array::<f32>()?;

        let candidates = decode_predictions(
            output.view(),
            self.input_size,
            self.confidence_threshold,
            frame.width() as f32,
            frame.height() as f32,
        )?;
        let detections = apply_nms(candidates, self.iou_threshold);

        debug!("YOLO detected {} objects", detections.len());
        Ok(detections)
    }

    fn name(&self) -> &str {
        "yolo"
    }
}

/// Decode the raw output head into threshold-passing detections in
/// original-frame pixel coordinates. No suppression yet.
fn decode_predictions(
    output: ArrayViewD<'_, f32>,
    input_size: u32,
    confidence_threshold: f32,
    frame_width: f32,
    frame_height: f32,
) -> Result<Vec<Detection>, VisionError> {
    let shape = output.shape();
    if shape.len() != 3 || shape[0] != 1 {
        return Err(VisionError::Processing(format!(
            "Unexpected YOLO output shape: {:?}",
            shape
        )));
    }

    // [1, attrs, anchors] with attrs = 4 + classes; anchors always outnumber
    // the attribute rows, which disambiguates a transposed export.
    let attrs_first = shape[1] <= shape[2];
    let (num_attrs, num_anchors) = if attrs_first {
        (shape[1], shape[2])
    } else {
        (shape[2], shape[1])
    };

    if num_attrs < 5 {
        return Err(VisionError::Processing(format!(
            "YOLO output has too few attributes per anchor: {}",
            num_attrs
        )));
    }

    let num_classes = (num_attrs - 4).min(labels::COCO_CLASSES.len());
    let at = |attr: usize, anchor: usize| -> f32 {
        if attrs_first {
            output[[0, attr, anchor]]
        } else {
            output[[0, anchor, attr]]
        }
    };

    if frame_width <= 0.0 || frame_height <= 0.0 {
        return Err(VisionError::Frame("Empty frame".to_string()));
    }

    let scale_x = frame_width / input_size as f32;
    let scale_y = frame_height / input_size as f32;

    let mut detections = Vec::new();
    for anchor in 0..num_anchors {
        let mut best_class = 0usize;
        let mut best_score = 0.0f32;
        for class_idx in 0..num_classes {
            let score = at(4 + class_idx, anchor);
            if score > best_score {
                best_score = score;
                best_class = class_idx;
            }
        }

        if !best_score.is_finite() || best_score < confidence_threshold {
            continue;
        }

        let cx = at(0, anchor);
        let cy = at(1, anchor);
        let w = at(2, anchor);
        let h = at(3, anchor);
        if !(cx.is_finite() && cy.is_finite() && w.is_finite() && h.is_finite()) {
            continue;
        }
        if w <= 0.0 || h <= 0.0 {
            continue;
        }

        // Center-form box in input pixels -> corner-form box in frame pixels
        let x = ((cx - w / 2.0) * scale_x).max(0.0);
        let y = ((cy - h / 2.0) * scale_y).max(0.0);
        let bw = (w * scale_x).min(frame_width - x);
        let bh = (h * scale_y).min(frame_height - y);
        if bw <= 0.0 || bh <= 0.0 {
            continue;
        }

        let label = match labels::label_for(best_class) {
            Some(label) => label,
            None => continue,
        };

        detections.push(Detection {
            class_id: best_class,
            label: label.to_string(),
            confidence: best_score,
            bbox: (x, y, bw, bh),
        });
    }

    Ok(detections)
}

/// Class-aware non-maximum suppression.
fn apply_nms(mut detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    if detections.is_empty() {
        return detections;
    }

    detections.retain(|d| d.confidence.is_finite() && (0.0..=1.0).contains(&d.confidence));
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep: Vec<Detection> = Vec::new();
    let mut suppressed = vec![false; detections.len()];

    for i in 0..detections.len() {
        if suppressed[i] {
            continue;
        }

        for j in (i + 1)..detections.len() {
            if suppressed[j] || detections[i].class_id != detections[j].class_id {
                continue;
            }

            let iou = compute_iou(&detections[i].bbox, &detections[j].bbox);
            if iou > iou_threshold {
                suppressed[j] = true;
            }
        }

        keep.push(detections[i].clone());
    }

    keep
}

/// IoU between two (x, y, width, height) boxes.
fn compute_iou(bbox1: &(f32, f32, f32, f32), bbox2: &(f32, f32, f32, f32)) -> f32 {
    let (x1, y1, w1, h1) = *bbox1;
    let (x2, y2, w2, h2) = *bbox2;

    if !(x1.is_finite() && y1.is_finite() && w1.is_finite() && h1.is_finite())
        || !(x2.is_finite() && y2.is_finite() && w2.is_finite() && h2.is_finite())
    {
        return 0.0;
    }

    if w1 <= 0.0 || h1 <= 0.0 || w2 <= 0.0 || h2 <= 0.0 {
        return 0.0;
    }

    let inter_x_min = x1.max(x2);
    let inter_y_min = y1.max(y2);
    let inter_x_max = (x1 + w1).min(x2 + w2);
    let inter_y_max = (y1 + h1).min(y2 + h2);

    if inter_x_max <= inter_x_min || inter_y_max <= inter_y_min {
        return 0.0;
    }

    let inter_area = (inter_x_max - inter_x_min) * (inter_y_max - inter_y_min);
    let union_area = w1 * h1 + w2 * h2 - inter_area;

    if union_area <= 0.0 || !union_area.is_finite() {
        return 0.0;
    }

    let iou = inter_area / union_area;
    if iou.is_finite() && (0.0..=1.0).contains(&iou) {
        iou
    } else {
        0.0
    }
}
