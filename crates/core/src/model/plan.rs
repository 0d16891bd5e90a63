use serde::{Deserialize, Serialize};

use super::{LessonPage, Question};

/// One-way commands understood by the voice assistant service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceCommand {
    Start,
    Stop,
}

impl VoiceCommand {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Voicebot",
            Self::Stop => "Stop Voicebot",
        }
    }
}

/// Static material shown on a single lesson page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    page: LessonPage,
    heading: String,
    summary: Option<String>,
    resources: Vec<String>,
    embed_url: Option<String>,
    video: Option<String>,
    question: Option<Question>,
    voice: Option<VoiceCommand>,
}

impl PageContent {
    #[must_use]
    pub fn new(page: LessonPage, heading: impl Into<String>) -> Self {
        Self {
            page,
            heading: heading.into(),
            summary: None,
            resources: Vec::new(),
            embed_url: None,
            video: None,
            question: None,
            voice: None,
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_embed(mut self, url: impl Into<String>) -> Self {
        self.embed_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_video(mut self, src: impl Into<String>) -> Self {
        self.video = Some(src.into());
        self
    }

    /// Attach the question answered on this page to move on.
    ///
    /// The question must unlock the page that follows this one.
    #[must_use]
    pub fn with_question(mut self, prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        if let Some(next) = self.page.next() {
            self.question = Some(Question::new(next, prompt, expected));
        }
        self
    }

    #[must_use]
    pub fn with_voice(mut self, command: VoiceCommand) -> Self {
        self.voice = Some(command);
        self
    }

    #[must_use]
    pub fn page(&self) -> LessonPage {
        self.page
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[must_use]
    pub fn embed_url(&self) -> Option<&str> {
        self.embed_url.as_deref()
    }

    #[must_use]
    pub fn video(&self) -> Option<&str> {
        self.video.as_deref()
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    #[must_use]
    pub fn voice(&self) -> Option<VoiceCommand> {
        self.voice
    }
}

/// The full walkthrough script: paper header plus per-page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    paper_title: String,
    authors: String,
    pages: Vec<PageContent>,
}

impl LessonPlan {
    #[must_use]
    pub fn new(paper_title: impl Into<String>, authors: impl Into<String>) -> Self {
        Self {
            paper_title: paper_title.into(),
            authors: authors.into(),
            pages: Vec::new(),
        }
    }

    /// Add or replace the content for a page.
    #[must_use]
    pub fn with_page(mut self, content: PageContent) -> Self {
        self.pages.retain(|existing| existing.page() != content.page());
        self.pages.push(content);
        self.pages.sort_by_key(PageContent::page);
        self
    }

    #[must_use]
    pub fn paper_title(&self) -> &str {
        &self.paper_title
    }

    #[must_use]
    pub fn authors(&self) -> &str {
        &self.authors
    }

    #[must_use]
    pub fn content(&self, page: LessonPage) -> Option<&PageContent> {
        self.pages.iter().find(|content| content.page() == page)
    }

    /// Question displayed on `page`, if any.
    #[must_use]
    pub fn question_on(&self, page: LessonPage) -> Option<&Question> {
        self.content(page).and_then(PageContent::question)
    }

    /// Question whose answer moves the session into `page`.
    #[must_use]
    pub fn question_unlocking(&self, page: LessonPage) -> Option<&Question> {
        self.pages
            .iter()
            .filter_map(PageContent::question)
            .find(|question| question.unlocks() == page)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.pages.iter().filter(|content| content.question().is_some()).count()
    }

    /// The Transformer walkthrough for "Attention Is All You Need".
    #[must_use]
    pub fn transformer() -> Self {
        Self::new("Attention is All You Need", "Vaswani et al.")
            .with_page(
                PageContent::new(LessonPage::Prerequisites, "Important Concepts")
                    .with_summary(
                        "This paper proposes a new architecture for sequence transduction \
                         called the Transformer. It utilizes attention mechanisms and dispenses \
                         with recurrence and convolutions. The Transformer is shown to be \
                         superior in quality to other existing models while requiring less time \
                         to train. It achieves the state-of-the-art on two machine translation \
                         tasks (English-to-German and English-to-French) and generalizes well to \
                         other tasks such as English constituency parsing.",
                    )
                    .with_resources([
                        "https://www.youtube.com/watch?v=ZXiruGOCn9s",
                        "https://www.youtube.com/watch?v=wjZofJX0v4M&t=183s",
                        "https://www.youtube.com/embed/aircAruvnKk",
                        "https://www.youtube.com/embed/fjJOgb-E41w",
                        "https://www.youtube.com/embed/yRwQ7A6jVLk",
                    ])
                    .with_question(
                        "Which mechanism does the Transformer rely on instead of recurrence \
                         and convolutions?",
                        "attention",
                    ),
            )
            .with_page(
                PageContent::new(LessonPage::KnowledgeMap, "Knowledge Map")
                    .with_embed("https://whimsical.com/embed/hNiv6Kf72QGC69RSkgitz")
                    .with_question(
                        "What is the key innovation introduced in the \"Attention is All You \
                         Need\" paper that allows the model to process input sequences in \
                         parallel?",
                        "self-attention",
                    ),
            )
            .with_page(
                PageContent::new(LessonPage::Attention, "Attention")
                    .with_video("/videos/tokens.mp4")
                    .with_question(
                        "What is the purpose of multi-head attention in the Transformer \
                         architecture?",
                        "different",
                    )
                    .with_voice(VoiceCommand::Start),
            )
            .with_page(
                PageContent::new(LessonPage::FeedForward, "Feed-Forward Networks")
                    .with_video("/videos/matrix-vector-multiplication.mov")
                    .with_question(
                        "How does the Transformer model handle variable-length input sequences?",
                        "mask",
                    ),
            )
            .with_page(
                PageContent::new(LessonPage::Embeddings, "Embeddings")
                    .with_video("/videos/neural-network-scene.mov")
                    .with_voice(VoiceCommand::Stop),
            )
    }
}

impl Default for LessonPlan {
    fn default() -> Self {
        Self::transformer()
    }
}
