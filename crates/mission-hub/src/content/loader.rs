//! Content document loading and structural validation.
//!
//! The document is validated field by field, collecting every violation
//! rather than stopping at the first. On any violation the full list is
//! logged and the raw value is rebuilt leniently — whatever coerces is kept,
//! the rest defaults. A malformed content file degrades the page, it never
//! crashes it.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use super::model::{
    Certification, ContactChannel, ContactKind, Education, HeroStat, ImpactMetric, Mission,
    OpenToRole, PortfolioDocument, Profile, SkillCluster, TimelineEntry,
};

/// One structural schema violation: where, and what was expected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub expected: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}", self.path, self.expected)
    }
}

/// Parse and validate a content document. Never fails.
///
/// Valid input yields the strictly-deserialized document. Invalid input
/// yields the lenient rebuild (or an empty default for unparseable JSON),
/// with the violations logged via `log::error!`.
pub fn load_document(json: &str) -> PortfolioDocument {
    let raw: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(err) => {
            log::error!("portfolio content is not valid JSON: {err}");
            return PortfolioDocument::default();
        }
    };

    let violations = validate(&raw);
    if violations.is_empty() {
        match serde_json::from_value(raw.clone()) {
            Ok(doc) => return doc,
            Err(err) => log::error!("portfolio content deserialization failed: {err}"),
        }
    } else {
        let joined: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
        log::error!(
            "portfolio content validation failed ({} violations): {}",
            violations.len(),
            joined.join("; ")
        );
    }
    lenient_document(&raw)
}

static DOCUMENT: OnceLock<PortfolioDocument> = OnceLock::new();

/// Install the process-wide document exactly once. Subsequent calls return
/// the same cached reference; the input is ignored after the first call.
pub fn install(json: &str) -> &'static PortfolioDocument {
    DOCUMENT.get_or_init(|| load_document(json))
}

/// The installed document, if [`install`] has run.
pub fn document() -> Option<&'static PortfolioDocument> {
    DOCUMENT.get()
}

// ── Validation ───────────────────────────────────────────────────────

/// Check the raw value against the structural schema, collecting all
/// violations. Shape and types only — no semantic checks (color syntax,
/// id uniqueness, position overlap are authoring responsibilities).
pub fn validate(raw: &Value) -> Vec<Violation> {
    let mut out = Vec::new();
    let Some(root) = as_object(Some(raw), "$", "object", &mut out) else {
        return out;
    };

    if let Some(profile) = as_object(field(root, "profile"), "$.profile", "object", &mut out) {
        for key in ["name", "title", "location", "phone", "email", "linkedin", "summary"] {
            require_str(profile, "$.profile", key, &mut out);
        }
    }

    each_object(root, "heroStats", &mut out, |obj, path, out| {
        require_str(obj, path, "id", out);
        require_str(obj, path, "value", out);
        require_str(obj, path, "label", out);
        optional_str(obj, path, "suffix", out);
    });

    each_object(root, "skills", &mut out, |obj, path, out| {
        require_str(obj, path, "category", out);
        require_str_array(obj, path, "skills", out);
    });

    each_object(root, "timeline", &mut out, |obj, path, out| {
        for key in ["period", "role", "company", "summary"] {
            require_str(obj, path, key, out);
        }
    });

    each_object(root, "missions", &mut out, |obj, path, out| {
        for key in ["id", "title", "tagline", "challenge", "solution", "period", "company", "color"] {
            require_str(obj, path, key, out);
        }
        require_str_array(obj, path, "techStack", out);
        require_position(obj, path, out);
        match field(obj, "impactMetrics").and_then(Value::as_array) {
            Some(metrics) => {
                for (i, metric) in metrics.iter().enumerate() {
                    let mpath = format!("{path}.impactMetrics[{i}]");
                    if let Some(m) = as_object(Some(metric), &mpath, "object", out) {
                        require_str(m, &mpath, "label", out);
                        require_str(m, &mpath, "value", out);
                        optional_str(m, &mpath, "suffix", out);
                    }
                }
            }
            None => out.push(Violation {
                path: format!("{path}.impactMetrics"),
                expected: "array",
            }),
        }
    });

    each_object(root, "education", &mut out, |obj, path, out| {
        for key in ["degree", "institution", "year"] {
            require_str(obj, path, key, out);
        }
    });

    each_object(root, "certifications", &mut out, |obj, path, out| {
        for key in ["name", "issuer", "year"] {
            require_str(obj, path, key, out);
        }
    });

    each_object(root, "openToRoles", &mut out, |obj, path, out| {
        require_str(obj, path, "title", out);
        require_str(obj, path, "type", out);
    });

    each_object(root, "contact", &mut out, |obj, path, out| {
        match field(obj, "type").and_then(Value::as_str) {
            Some("email" | "phone" | "linkedin" | "resume") => {}
            _ => out.push(Violation {
                path: format!("{path}.type"),
                expected: "one of email|phone|linkedin|resume",
            }),
        }
        require_str(obj, path, "label", out);
        require_str(obj, path, "href", out);
        require_str(obj, path, "trackingEvent", out);
    });

    out
}

type Object = serde_json::Map<String, Value>;

fn field<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key)
}

fn as_object<'a>(
    value: Option<&'a Value>,
    path: &str,
    expected: &'static str,
    out: &mut Vec<Violation>,
) -> Option<&'a Object> {
    match value.and_then(Value::as_object) {
        Some(obj) => Some(obj),
        None => {
            out.push(Violation {
                path: path.to_string(),
                expected,
            });
            None
        }
    }
}

fn require_str(obj: &Object, path: &str, key: &str, out: &mut Vec<Violation>) {
    if field(obj, key).and_then(Value::as_str).is_none() {
        out.push(Violation {
            path: format!("{path}.{key}"),
            expected: "string",
        });
    }
}

fn optional_str(obj: &Object, path: &str, key: &str, out: &mut Vec<Violation>) {
    if let Some(v) = field(obj, key) {
        if !v.is_string() {
            out.push(Violation {
                path: format!("{path}.{key}"),
                expected: "string (optional)",
            });
        }
    }
}

fn require_str_array(obj: &Object, path: &str, key: &str, out: &mut Vec<Violation>) {
    match field(obj, key).and_then(Value::as_array) {
        Some(items) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    out.push(Violation {
                        path: format!("{path}.{key}[{i}]"),
                        expected: "string",
                    });
                }
            }
        }
        None => out.push(Violation {
            path: format!("{path}.{key}"),
            expected: "array of strings",
        }),
    }
}

fn require_position(obj: &Object, path: &str, out: &mut Vec<Violation>) {
    let ok = matches!(
        field(obj, "position").and_then(Value::as_array),
        Some(tuple) if tuple.len() == 3 && tuple.iter().all(Value::is_number)
    );
    if !ok {
        out.push(Violation {
            path: format!("{path}.position"),
            expected: "[number, number, number]",
        });
    }
}

/// Validate one named array of objects, calling `check` per element.
fn each_object(
    root: &Object,
    key: &str,
    out: &mut Vec<Violation>,
    check: impl Fn(&Object, &str, &mut Vec<Violation>),
) {
    match field(root, key).and_then(Value::as_array) {
        Some(items) => {
            for (i, item) in items.iter().enumerate() {
                let path = format!("$.{key}[{i}]");
                if let Some(obj) = as_object(Some(item), &path, "object", out) {
                    check(obj, &path, out);
                }
            }
        }
        None => out.push(Violation {
            path: format!("$.{key}"),
            expected: "array",
        }),
    }
}

// ── Lenient rebuild ──────────────────────────────────────────────────

fn str_at(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_at(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn str_vec_at(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn items_at<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|a| a.iter().collect())
        .unwrap_or_default()
}

fn lenient_document(raw: &Value) -> PortfolioDocument {
    let profile = raw
        .get("profile")
        .map(|p| Profile {
            name: str_at(p, "name"),
            title: str_at(p, "title"),
            location: str_at(p, "location"),
            phone: str_at(p, "phone"),
            email: str_at(p, "email"),
            linkedin: str_at(p, "linkedin"),
            summary: str_at(p, "summary"),
        })
        .unwrap_or_default();

    PortfolioDocument {
        profile,
        hero_stats: items_at(raw, "heroStats")
            .into_iter()
            .map(|v| HeroStat {
                id: str_at(v, "id"),
                value: str_at(v, "value"),
                label: str_at(v, "label"),
                suffix: opt_str_at(v, "suffix"),
            })
            .collect(),
        skills: items_at(raw, "skills")
            .into_iter()
            .map(|v| SkillCluster {
                category: str_at(v, "category"),
                skills: str_vec_at(v, "skills"),
            })
            .collect(),
        timeline: items_at(raw, "timeline")
            .into_iter()
            .map(|v| TimelineEntry {
                period: str_at(v, "period"),
                role: str_at(v, "role"),
                company: str_at(v, "company"),
                summary: str_at(v, "summary"),
            })
            .collect(),
        missions: items_at(raw, "missions").into_iter().map(lenient_mission).collect(),
        education: items_at(raw, "education")
            .into_iter()
            .map(|v| Education {
                degree: str_at(v, "degree"),
                institution: str_at(v, "institution"),
                year: str_at(v, "year"),
            })
            .collect(),
        certifications: items_at(raw, "certifications")
            .into_iter()
            .map(|v| Certification {
                name: str_at(v, "name"),
                issuer: str_at(v, "issuer"),
                year: str_at(v, "year"),
            })
            .collect(),
        open_to_roles: items_at(raw, "openToRoles")
            .into_iter()
            .map(|v| OpenToRole {
                title: str_at(v, "title"),
                kind: str_at(v, "type"),
            })
            .collect(),
        contact: items_at(raw, "contact")
            .into_iter()
            .map(|v| ContactChannel {
                kind: match v.get("type").and_then(Value::as_str) {
                    Some("phone") => ContactKind::Phone,
                    Some("linkedin") => ContactKind::Linkedin,
                    Some("resume") => ContactKind::Resume,
                    _ => ContactKind::Email,
                },
                label: str_at(v, "label"),
                href: str_at(v, "href"),
                tracking_event: str_at(v, "trackingEvent"),
            })
            .collect(),
    }
}

fn lenient_mission(v: &Value) -> Mission {
    let position = v
        .get("position")
        .and_then(Value::as_array)
        .filter(|t| t.len() == 3)
        .map(|t| {
            let mut pos = [0.0f32; 3];
            for (slot, value) in pos.iter_mut().zip(t.iter()) {
                *slot = value.as_f64().unwrap_or(0.0) as f32;
            }
            pos
        })
        .unwrap_or_default();

    Mission {
        id: str_at(v, "id"),
        title: str_at(v, "title"),
        tagline: str_at(v, "tagline"),
        challenge: str_at(v, "challenge"),
        solution: str_at(v, "solution"),
        impact_metrics: items_at(v, "impactMetrics")
            .into_iter()
            .map(|m| ImpactMetric {
                label: str_at(m, "label"),
                value: str_at(m, "value"),
                suffix: opt_str_at(m, "suffix"),
            })
            .collect(),
        tech_stack: str_vec_at(v, "techStack"),
        period: str_at(v, "period"),
        company: str_at(v, "company"),
        position,
        color: str_at(v, "color"),
    }
}
