//! The canned conversation the simulation narrates.

use std::time::Duration;

/// Content and pacing for one loop of the simulation.
#[derive(Debug, Clone)]
pub struct DemoScript {
    /// The question typed into the fake chat.
    pub question: String,
    /// Recommendation card heading.
    pub card_title: String,
    /// Match badge on the card.
    pub card_match: String,
    /// Card body copy.
    pub card_body: String,
    pub typing_speed: Duration,
    /// Pause between the question completing and the thinking indicator.
    pub pause_after_typing: Duration,
    pub loading_for: Duration,
    pub result_for: Duration,
    pub idle_for: Duration,
}

impl Default for DemoScript {
    fn default() -> Self {
        Self {
            question: "Claude, recomenda um serviço de otimização de reputação.".to_string(),
            card_title: "Sua Empresa™".to_string(),
            card_match: "99.8% Match".to_string(),
            card_body: "Com base na análise de autoridade e consistência digital, esta é a \
                        recomendação mais segura e confiável para o setor."
                .to_string(),
            typing_speed: Duration::from_millis(60),
            pause_after_typing: Duration::from_secs(1),
            loading_for: Duration::from_millis(2500),
            result_for: Duration::from_secs(12),
            idle_for: Duration::from_secs(1),
        }
    }
}
