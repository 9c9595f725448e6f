// Copyright (c) 2026 Easel Nodes contributors
// SPDX-License-Identifier: MIT

use crate::host::HostServices;
use crate::observability::messages::lora::{LoraApplyFailed, LoraTagResolved, LoraTagSkipped};
use crate::observability::messages::StructuredLog;
use crate::values::HostObject;

use super::tags::{candidate_names, parse_strengths, LORA_TAG};

/// Scan `text` for inline LoRA tags and apply each resolvable one to the
/// model/clip pair through the host library.
///
/// Handled tags are removed from the text. A tag stays in the text when:
/// * neither a model nor a clip is present to apply it to,
/// * no candidate filename resolves in the asset database, or
/// * the host library fails to load or apply it.
///
/// The last two are logged; none of them abort the scan. Returns the
/// (possibly replaced) handles and the trimmed, cleaned text.
pub fn apply_tags(
    services: &HostServices,
    extensions: &[String],
    model: Option<HostObject>,
    clip: Option<HostObject>,
    text: &str,
) -> (Option<HostObject>, Option<HostObject>, String) {
    let mut model = model;
    let mut clip = clip;
    let mut cleaned = String::with_capacity(text.len());
    let mut tail = 0;

    for caps in LORA_TAG.captures_iter(text) {
        let Some(tag) = caps.get(0) else { continue };
        cleaned.push_str(&text[tail..tag.start()]);
        tail = tag.end();

        if model.is_none() && clip.is_none() {
            cleaned.push_str(tag.as_str());
            continue;
        }

        let name = caps
            .get(1)
            .map(|g| g.as_str().trim())
            .unwrap_or_default();
        let (strength_model, strength_clip) = parse_strengths(caps.get(2).map(|g| g.as_str()));

        let path = candidate_names(name, extensions)
            .into_iter()
            .find_map(|candidate| services.assets.resolve("loras", &candidate).ok());

        let Some(path) = path else {
            LoraTagSkipped { tag: tag.as_str() }.log();
            cleaned.push_str(tag.as_str());
            continue;
        };

        match services
            .loras
            .apply(model.clone(), clip.clone(), &path, strength_model, strength_clip)
        {
            Ok((new_model, new_clip)) => {
                LoraTagResolved {
                    name,
                    path: &path,
                    strength_model,
                    strength_clip,
                }
                .log();
                model = new_model;
                clip = new_clip;
            }
            Err(error) => {
                LoraApplyFailed {
                    name,
                    error: &error,
                }
                .log();
                cleaned.push_str(tag.as_str());
            }
        }
    }

    cleaned.push_str(&text[tail..]);
    (model, clip, cleaned.trim().to_string())
}
