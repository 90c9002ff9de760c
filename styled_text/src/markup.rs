// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

use hashbrown::HashMap;
use text_markup::{DEFAULT_TRANSFORMERS, Tag, TagTransformer, Tokenized, tokenize};

use crate::detection::{Detection, DetectionType};
use crate::style::Style;
use crate::text::StyledText;

/// A per-occurrence adjustment of the style bound to a tag.
pub type StyleTuner = dyn Fn(&Style, &Tag) -> Style + Send + Sync;

/// How [`style_tags`](crate::StyleMarkupExt::style_tags) styles markup.
///
/// Styles are bound to tags by [`Style::name`], ignoring ASCII case. When several styles
/// share a name, the first one registered wins. A tuner, if set, sees every bound style
/// together with the tag it is about to be applied to, and returns the style to use.
///
/// ```
/// use styled_text::style::{Color, Font, StateKey, Style};
/// use styled_text::{StyleMarkupExt, TagStyles};
///
/// let styles = TagStyles::new()
///     .with_style(Style::named_new("b").font(Font::bold_system(14.0), StateKey::Normal))
///     .with_style(Style::named_new("a").underline(true, StateKey::Normal))
///     .with_tuner(|style, tag| match tag.attribute("class") {
///         Some("alert") => style.clone().foreground_color(Color::RED, StateKey::Normal),
///         _ => style.clone(),
///     });
///
/// let text = r#"<b>Note</b>: <a class="alert">read this</a>"#.style_tags(&styles);
/// assert_eq!(text.as_str(), "Note: read this");
/// assert_eq!(text.detections().len(), 2);
/// ```
#[derive(Clone)]
pub struct TagStyles {
    styles: HashMap<String, Style>,
    tuner: Option<Arc<StyleTuner>>,
    transformers: Cow<'static, [TagTransformer]>,
}

impl Default for TagStyles {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TagStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagStyles")
            .field("styles", &self.styles)
            .field("tuner", &self.tuner.as_ref().map(|_| "Fn(&Style, &Tag) -> Style"))
            .field("transformers", &self.transformers)
            .finish()
    }
}

impl TagStyles {
    /// Creates a strategy with no styles, no tuner and [`DEFAULT_TRANSFORMERS`].
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
            tuner: None,
            transformers: Cow::Borrowed(DEFAULT_TRANSFORMERS),
        }
    }

    /// Creates a strategy binding each of `styles` by name.
    pub fn from_styles(styles: impl IntoIterator<Item = Style>) -> Self {
        styles.into_iter().fold(Self::new(), Self::with_style)
    }

    /// Binds `style` to tags named like it.
    ///
    /// Unnamed styles can't match anything and are ignored, as are styles whose name is
    /// already bound.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        let Some(name) = style.name() else {
            log::debug!("ignoring unnamed tag style");
            return self;
        };
        let key = name.to_ascii_lowercase();
        if self.styles.contains_key(&key) {
            log::debug!("tag style `{name}` is already bound; keeping the first one");
            return self;
        }
        self.styles.insert(key, style);
        self
    }

    /// Sets the tuner.
    #[must_use]
    pub fn with_tuner(
        mut self,
        tuner: impl Fn(&Style, &Tag) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.tuner = Some(Arc::new(tuner));
        self
    }

    /// Replaces the transformers applied while tokenizing.
    #[must_use]
    pub fn with_transformers(
        mut self,
        transformers: impl Into<Cow<'static, [TagTransformer]>>,
    ) -> Self {
        self.transformers = transformers.into();
        self
    }

    /// The transformers applied while tokenizing.
    pub fn transformers(&self) -> &[TagTransformer] {
        &self.transformers
    }

    /// The style for one occurrence of `tag`, or `None` if no style is bound to its name.
    pub fn style_for(&self, tag: &Tag) -> Option<Style> {
        let style = self.styles.get(tag.name().to_ascii_lowercase().as_str())?;
        Some(match &self.tuner {
            Some(tuner) => tuner(style, tag),
            None => style.clone(),
        })
    }

    /// Tokenizes `input` and turns every tag into a detection.
    ///
    /// Tags without a bound style still get a detection, with an empty style, so they can
    /// be hit-tested.
    pub(crate) fn apply(&self, input: &str) -> StyledText {
        let Tokenized { text, tags } = tokenize(input, &self.transformers);
        let detections: Vec<_> = tags
            .into_iter()
            .map(|info| {
                let style = self.style_for(&info.tag).unwrap_or_default();
                Detection::new(DetectionType::Tag(info.tag), style, info.range, info.level)
            })
            .collect();
        let char_len = text.chars().count();
        StyledText::from_parts(text.into(), char_len, detections, Style::new())
    }
}
