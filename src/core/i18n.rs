use crate::domain::ports::PreferenceStore;
use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// 偏好設定在本機儲存中的固定鍵
pub const LANGUAGE_STORAGE_KEY: &str = "paradaim-language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            other => Err(SiteError::ValidationError {
                message: format!("Unsupported language code '{}', expected 'en' or 'de'", other),
            }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pure lookup. A missing key returns the key itself so gaps stay visible.
pub fn translate(key: &str, language: Language) -> String {
    tables()
        .get(&language)
        .and_then(|table| table.get(key))
        .map(|value| value.to_string())
        .unwrap_or_else(|| key.to_string())
}

fn tables() -> &'static HashMap<Language, HashMap<&'static str, &'static str>> {
    static TABLES: OnceLock<HashMap<Language, HashMap<&'static str, &'static str>>> =
        OnceLock::new();
    TABLES.get_or_init(|| {
        HashMap::from([
            (Language::En, EN.iter().copied().collect()),
            (Language::De, DE.iter().copied().collect()),
        ])
    })
}

/// 顯示語言的上下文，由組合根建立後向下傳遞，取代全域狀態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// 啟動時讀取已保存的語言；無效或缺少的值回到預設英文
    pub async fn load<S: PreferenceStore>(store: &S) -> Result<Self> {
        let saved = store.get_item(LANGUAGE_STORAGE_KEY).await?;
        let language = match saved.as_deref().map(Language::from_str) {
            Some(Ok(language)) => language,
            Some(Err(e)) => {
                tracing::debug!("Ignoring stored language preference: {}", e);
                Language::default()
            }
            None => Language::default(),
        };
        Ok(Self { language })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Every change is written through to the store.
    pub async fn set_language<S: PreferenceStore>(
        &mut self,
        store: &S,
        language: Language,
    ) -> Result<()> {
        self.language = language;
        store.set_item(LANGUAGE_STORAGE_KEY, language.code()).await?;
        tracing::debug!("Language preference set to {}", language);
        Ok(())
    }

    pub fn t(&self, key: &str) -> String {
        translate(key, self.language)
    }
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.services", "Services"),
    ("nav.works", "Works"),
    ("nav.team", "Team"),
    ("nav.articles", "Articles"),
    ("nav.pricing", "Pricing"),
    ("nav.contact", "Contact"),
    ("hero.title", "The starting point of your brand with the presentation of innovation and creativity"),
    ("hero.subtitle", "Newly made, but backed by excellence – team with proven records in top-tier projects. We create authentic brands that resonate."),
    ("hero.quote", "\"The creation of something new is not accomplished by the intellect but by the play instinct acting from inner necessity. The creative mind plays with the objects it loves.\" — Carl Jung"),
    ("hero.cta", "Start Your Project"),
    ("services.title", "Our Services"),
    ("services.graphic.title", "Graphic Design"),
    ("services.graphic.desc", "We create visual identities that capture your brand essence and communicate your values effectively."),
    ("services.web.title", "Web Development"),
    ("services.web.desc", "Modern, responsive websites built with cutting-edge technology and optimized for performance."),
    ("services.branding.title", "Brand Strategy"),
    ("services.branding.desc", "Comprehensive brand development from concept to execution, ensuring consistent messaging."),
    ("services.creative.title", "Creative Strategy"),
    ("services.creative.desc", "Innovative approaches to solve complex design challenges and create memorable experiences."),
    ("services.mobile.title", "Mobile Design"),
    ("services.mobile.desc", "User-centered mobile experiences that engage and convert across all devices and platforms."),
    ("services.marketing.title", "Digital Marketing"),
    ("services.marketing.desc", "Data-driven marketing strategies that amplify your brand reach and drive meaningful engagement."),
    ("office.title", "Our Creative Space"),
    ("office.subtitle", "Where innovation meets collaboration. Take a look inside our inspiring workspace."),
    ("clients.title", "Trusted by industry leaders"),
    ("footer.copyright", "© 2025 Paradaim. All rights reserved."),
    ("footer.quicklinks", "Quick Links"),
    ("footer.follow", "Follow Us"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.aboutUs.title", "About Paradaim"),
    ("footer.aboutUs.description", "Elite team with proven records transforming brands globally. Newly formed with industry veterans boasting 10+ years in design and development."),
    ("articles.title", "Latest Articles"),
    ("articles.subtitle", "Insights, trends, and expertise from our creative team"),
    ("articles.viewAll", "View All Articles"),
    ("testimonials.title", "What Our Clients Say"),
    ("testimonials.subtitle", "Trusted by businesses worldwide for exceptional creative solutions"),
    ("pricing.title", "Choose Your Plan"),
    ("pricing.subtitle", "Flexible pricing options designed to grow with your business needs"),
    ("pricing.customNote", "Need a custom solution? We'd love to discuss your specific requirements."),
    ("pricing.contactSales", "Contact Sales"),
    ("contact.title", "Get In Touch"),
    ("contact.subtitle", "Ready to transform your brand? Let's start a conversation about your next project."),
    ("contact.form.title", "Send us a message"),
    ("contact.form.description", "We'll get back to you within 24 hours."),
    ("contact.form.name", "Full Name"),
    ("contact.form.namePlaceholder", "Enter your full name"),
    ("contact.form.email", "Email Address"),
    ("contact.form.emailPlaceholder", "Enter your email address"),
    ("contact.form.message", "Message"),
    ("contact.form.messagePlaceholder", "Tell us about your project..."),
    ("contact.form.send", "Send Message"),
    ("contact.form.sending", "Sending..."),
    ("contact.success.title", "Message Sent!"),
    ("contact.success.message", "Thank you for reaching out. We'll get back to you soon."),
    ("contact.error.title", "Error"),
    ("contact.error.message", "Failed to send message. Please try again."),
    ("contact.validation.required", "This field is required."),
    ("contact.validation.email", "Please enter a valid email address."),
    ("contact.info.title", "Contact Information"),
    ("contact.info.address.title", "Our Office"),
    ("contact.info.phone.title", "Phone"),
    ("contact.info.email.title", "Email"),
    ("contact.office.title", "Our Creative Space"),
    ("contact.office.description", "Take a peek inside our inspiring workspace"),
    ("chatbot.title", "Innovation AI"),
    ("chatbot.subtitle", "Your creative assistant"),
    ("chatbot.openChat", "Chat with our innovation AI"),
    ("chatbot.welcomeMessage", "Hi! I'm here to help you explore our services and answer any questions about your creative projects."),
    ("chatbot.quickAction1", "Tell me about your services"),
    ("chatbot.quickAction2", "Show me your portfolio"),
    ("chatbot.quickAction3", "Get a project quote"),
    ("chatbot.disclaimer", "This is a demo chatbot interface"),
];

const DE: &[(&str, &str)] = &[
    ("nav.home", "Startseite"),
    ("nav.services", "Leistungen"),
    ("nav.works", "Arbeiten"),
    ("nav.team", "Team"),
    ("nav.articles", "Artikel"),
    ("nav.pricing", "Preise"),
    ("nav.contact", "Kontakt"),
    ("hero.title", "Der Ausgangspunkt Ihrer Marke mit der Präsentation von Innovation und Kreativität"),
    ("hero.subtitle", "Neu gegründet, aber von Exzellenz unterstützt – Team mit bewährten Erfolgen in erstklassigen Projekten. Wir schaffen authentische Marken, die resonieren."),
    ("hero.quote", "\"Die Schöpfung von etwas Neuem wird nicht durch den Intellekt vollbracht, sondern durch den Spieltrieb, der aus innerer Notwendigkeit handelt. Der kreative Geist spielt mit den Objekten, die er liebt.\" — Carl Jung"),
    ("hero.cta", "Projekt Starten"),
    ("services.title", "Unsere Leistungen"),
    ("services.graphic.title", "Grafikdesign"),
    ("services.graphic.desc", "Wir erstellen visuelle Identitäten, die Ihr Markenwesen erfassen und Ihre Werte effektiv kommunizieren."),
    ("services.web.title", "Webentwicklung"),
    ("services.web.desc", "Moderne, responsive Websites mit modernster Technologie und optimiert für Leistung."),
    ("services.branding.title", "Markenstrategie"),
    ("services.branding.desc", "Umfassende Markenentwicklung vom Konzept bis zur Umsetzung mit konsistenter Botschaft."),
    ("services.creative.title", "Kreativstrategie"),
    ("services.creative.desc", "Innovative Ansätze zur Lösung komplexer Designherausforderungen und zur Schaffung unvergesslicher Erlebnisse."),
    ("services.mobile.title", "Mobile Design"),
    ("services.mobile.desc", "Benutzerzentrierte mobile Erlebnisse, die auf allen Geräten und Plattformen begeistern und konvertieren."),
    ("services.marketing.title", "Digitales Marketing"),
    ("services.marketing.desc", "Datengesteuerte Marketingstrategien, die Ihre Markenreichweite verstärken und sinnvolles Engagement fördern."),
    ("office.title", "Unser Kreativer Raum"),
    ("office.subtitle", "Wo Innovation auf Zusammenarbeit trifft. Werfen Sie einen Blick in unseren inspirierenden Arbeitsplatz."),
    ("clients.title", "Vertraut von Branchenführern"),
    ("footer.copyright", "© 2025 Paradaim. Alle Rechte vorbehalten."),
    ("footer.quicklinks", "Schnellzugriff"),
    ("footer.follow", "Folgen Sie uns"),
    ("footer.privacy", "Datenschutz"),
    ("footer.terms", "Nutzungsbedingungen"),
    ("footer.aboutUs.title", "Über Paradaim"),
    ("footer.aboutUs.description", "Elite-Team mit bewährten Erfolgen bei der globalen Transformation von Marken. Neu gegründet mit Branchenveteranen mit über 10 Jahren Erfahrung in Design und Entwicklung."),
    ("articles.title", "Neueste Artikel"),
    ("articles.subtitle", "Einblicke, Trends und Expertise von unserem kreativen Team"),
    ("articles.viewAll", "Alle Artikel anzeigen"),
    ("testimonials.title", "Was unsere Kunden sagen"),
    ("testimonials.subtitle", "Vertraut von Unternehmen weltweit für außergewöhnliche kreative Lösungen"),
    ("pricing.title", "Wählen Sie Ihren Plan"),
    ("pricing.subtitle", "Flexible Preisoptionen, die mit Ihren Geschäftsanforderungen wachsen"),
    ("pricing.customNote", "Benötigen Sie eine maßgeschneiderte Lösung? Wir besprechen gerne Ihre spezifischen Anforderungen."),
    ("pricing.contactSales", "Vertrieb kontaktieren"),
    ("contact.title", "Kontakt aufnehmen"),
    ("contact.subtitle", "Bereit, Ihre Marke zu transformieren? Lassen Sie uns über Ihr nächstes Projekt sprechen."),
    ("contact.form.title", "Senden Sie uns eine Nachricht"),
    ("contact.form.description", "Wir melden uns innerhalb von 24 Stunden bei Ihnen."),
    ("contact.form.name", "Vollständiger Name"),
    ("contact.form.namePlaceholder", "Geben Sie Ihren vollständigen Namen ein"),
    ("contact.form.email", "E-Mail-Adresse"),
    ("contact.form.emailPlaceholder", "Geben Sie Ihre E-Mail-Adresse ein"),
    ("contact.form.message", "Nachricht"),
    ("contact.form.messagePlaceholder", "Erzählen Sie uns von Ihrem Projekt..."),
    ("contact.form.send", "Nachricht senden"),
    ("contact.form.sending", "Wird gesendet..."),
    ("contact.success.title", "Nachricht gesendet!"),
    ("contact.success.message", "Vielen Dank für Ihre Nachricht. Wir melden uns bald bei Ihnen."),
    ("contact.error.title", "Fehler"),
    ("contact.error.message", "Nachricht konnte nicht gesendet werden. Bitte versuchen Sie es erneut."),
    ("contact.validation.required", "Dieses Feld ist erforderlich."),
    ("contact.validation.email", "Bitte geben Sie eine gültige E-Mail-Adresse ein."),
    ("contact.info.title", "Kontaktinformationen"),
    ("contact.info.address.title", "Unser Büro"),
    ("contact.info.phone.title", "Telefon"),
    ("contact.info.email.title", "E-Mail"),
    ("contact.office.title", "Unser Kreativer Raum"),
    ("contact.office.description", "Werfen Sie einen Blick in unseren inspirierenden Arbeitsplatz"),
    ("chatbot.title", "Innovations-KI"),
    ("chatbot.subtitle", "Ihr kreativer Assistent"),
    ("chatbot.openChat", "Chatten Sie mit unserer Innovations-KI"),
    ("chatbot.welcomeMessage", "Hallo! Ich bin hier, um Ihnen bei der Erkundung unserer Dienstleistungen zu helfen und Fragen zu Ihren kreativen Projekten zu beantworten."),
    ("chatbot.quickAction1", "Erzählen Sie mir von Ihren Dienstleistungen"),
    ("chatbot.quickAction2", "Zeigen Sie mir Ihr Portfolio"),
    ("chatbot.quickAction3", "Projektangebot erhalten"),
    ("chatbot.disclaimer", "Dies ist eine Demo-Chatbot-Oberfläche"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate("nav.pricing", Language::En), "Pricing");
        assert_eq!(translate("nav.pricing", Language::De), "Preise");
    }

    #[test]
    fn test_translate_missing_key_returns_key() {
        assert_eq!(translate("hero.missing", Language::De), "hero.missing");
        assert_eq!(translate("", Language::En), "");
    }

    #[test]
    fn test_tables_have_identical_keys() {
        let en: std::collections::HashSet<_> = EN.iter().map(|(k, _)| *k).collect();
        let de: std::collections::HashSet<_> = DE.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, de);
        assert_eq!(en.len(), EN.len());
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::De);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default().code(), "en");
    }
}
