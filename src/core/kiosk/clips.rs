use super::state::Clip;

/// Static presentation data for a clip: on-screen label, backdrop color, and
/// the looping video played while the clip is active (None = placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    pub media: Option<&'static str>,
}

const IDLE: ClipDescriptor = ClipDescriptor {
    label: "待機",
    color: "#3a506b",
    media: None,
};
const GREETING: ClipDescriptor = ClipDescriptor {
    label: "挨拶",
    color: "#90be6d",
    media: Some("/clips/call.mp4"),
};
const EXPLAINING: ClipDescriptor = ClipDescriptor {
    label: "説明",
    color: "#5bc0be",
    media: Some("/clips/call.mp4"),
};
const AGREEING: ClipDescriptor = ClipDescriptor {
    label: "承知",
    color: "#4CAF50",
    media: Some("/clips/call.mp4"),
};
const DELIVERY: ClipDescriptor = ClipDescriptor {
    label: "配送対応",
    color: "#f4a261",
    media: Some("/clips/delivery.mp4"),
};
const THINKING: ClipDescriptor = ClipDescriptor {
    label: "検索中",
    color: "#6fffe9",
    media: None,
};
const WARNING: ClipDescriptor = ClipDescriptor {
    label: "注意",
    color: "#ff6b6b",
    media: None,
};

impl Clip {
    /// Fixed descriptor for this clip.
    pub const fn descriptor(self) -> &'static ClipDescriptor {
        match self {
            Clip::Idle => &IDLE,
            Clip::Greeting => &GREETING,
            Clip::Explaining => &EXPLAINING,
            Clip::Agreeing => &AGREEING,
            Clip::Delivery => &DELIVERY,
            Clip::Thinking => &THINKING,
            Clip::Warning => &WARNING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_clip_has_a_descriptor() {
        let clips = [
            Clip::Idle,
            Clip::Greeting,
            Clip::Explaining,
            Clip::Agreeing,
            Clip::Delivery,
            Clip::Thinking,
            Clip::Warning,
        ];
        for clip in clips {
            let d = clip.descriptor();
            assert!(!d.label.is_empty());
            assert!(d.color.starts_with('#'));
        }
        assert_eq!(Clip::Delivery.descriptor().media, Some("/clips/delivery.mp4"));
        assert_eq!(Clip::Thinking.descriptor().media, None);
    }
}
