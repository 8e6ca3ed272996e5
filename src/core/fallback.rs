//! Hand-authored datasets used when the content API is unreachable.
//!
//! Every function here is pure: no I/O, no counters, same output for the same
//! language. Shapes match the remote payloads exactly, so the presenters
//! render both paths with the same code.

use crate::core::i18n::Language;
use crate::domain::model::{
    Article, Author, ButtonVariant, PlanIcon, PricingPlan, Project, Service, ServiceIcon,
    SocialLinks, TeamMember, Testimonial,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pick(language: Language, en: &str, de: &str) -> String {
    match language {
        Language::En => en.to_string(),
        Language::De => de.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackProvider {
    language: Language,
}

impl FallbackProvider {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn articles(&self) -> Vec<Article> {
        let summary = |id: &str,
                       slug: &str,
                       title: &str,
                       excerpt: &str,
                       category: &str,
                       published_at: &str,
                       read_time: u32,
                       image: &str,
                       author: (&str, &str)| Article {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: "Full article content here...".to_string(),
            category: category.to_string(),
            published_at: published_at.to_string(),
            read_time: f64::from(read_time),
            image: image.to_string(),
            author: Author {
                name: author.0.to_string(),
                avatar: author.1.to_string(),
                bio: String::new(),
            },
            tags: Vec::new(),
        };

        vec![
            summary(
                "1",
                "future-of-web-design",
                "The Future of Web Design: Trends to Watch in 2025",
                "Explore the cutting-edge design trends that will shape the digital landscape this year, from AI-powered interfaces to sustainable design practices.",
                "Design Insights",
                "2025-01-15",
                5,
                "/modern-web-design.png",
                ("Sarah Johnson", "/professional-designer.png"),
            ),
            summary(
                "2",
                "brand-identity-essentials",
                "Brand Identity Essentials: Building Recognition That Lasts",
                "Discover the fundamental elements that create memorable brand identities and learn how to develop a cohesive visual language for your business.",
                "Branding",
                "2025-01-10",
                7,
                "/brand-identity-design.png",
                ("Marcus Chen", "/brand-strategist.jpg"),
            ),
            summary(
                "3",
                "user-experience-psychology",
                "The Psychology Behind Great User Experience",
                "Understanding user behavior and cognitive patterns to create intuitive, engaging digital experiences that convert visitors into customers.",
                "UX Design",
                "2025-01-05",
                6,
                "/user-experience-design.png",
                ("Emily Rodriguez", "/ux-designer-workflow.png"),
            ),
            summary(
                "4",
                "creative-process-innovation",
                "Innovation in Creative Process: From Concept to Execution",
                "Our proven methodology for transforming creative ideas into successful brand implementations, featuring real case studies and insights.",
                "Process",
                "2024-12-28",
                8,
                "/creative-design-process.png",
                ("David Kim", "/creative-director.png"),
            ),
            summary(
                "5",
                "sustainable-design-practices",
                "Sustainable Design: Creating Eco-Friendly Digital Experiences",
                "Learn how to implement sustainable design practices that reduce environmental impact while maintaining exceptional user experiences.",
                "Sustainability",
                "2024-12-20",
                6,
                "/sustainable-design-concept.png",
                ("Lisa Thompson", "/sustainability-expert.jpg"),
            ),
            summary(
                "6",
                "ai-in-creative-industry",
                "AI in Creative Industry: Tool or Threat?",
                "Examining the role of artificial intelligence in creative work and how designers can leverage AI tools to enhance their workflow.",
                "Technology",
                "2024-12-15",
                9,
                "/ai-creative-design.jpg",
                ("Alex Morgan", "/tech-designer.jpg"),
            ),
        ]
    }

    /// 首頁只顯示最新四篇
    pub fn latest_articles(&self) -> Vec<Article> {
        self.articles().into_iter().take(4).collect()
    }

    /// Full article for the detail page. Unknown slugs have no fallback.
    pub fn article(&self, slug: &str) -> Option<Article> {
        match slug {
            "future-of-web-design" => Some(Article {
                id: "1".to_string(),
                slug: "future-of-web-design".to_string(),
                title: "The Future of Web Design: Trends to Watch in 2025".to_string(),
                excerpt: "Explore the cutting-edge design trends that will shape the digital landscape this year, from AI-powered interfaces to sustainable design practices.".to_string(),
                content: FUTURE_OF_WEB_DESIGN_BODY.to_string(),
                category: "Design Insights".to_string(),
                published_at: "2025-01-15".to_string(),
                read_time: 5.0,
                image: "/modern-web-design.png".to_string(),
                author: Author {
                    name: "Sarah Johnson".to_string(),
                    avatar: "/professional-designer.png".to_string(),
                    bio: "Senior UX Designer with 8+ years of experience in creating digital experiences for Fortune 500 companies.".to_string(),
                },
                tags: strings(&["Web Design", "UI/UX", "Trends", "Technology", "Future"]),
            }),
            _ => None,
        }
    }

    pub fn related_articles(&self) -> Vec<Article> {
        Vec::new()
    }

    pub fn services(&self) -> Vec<Service> {
        let lang = self.language;
        vec![
            Service {
                id: "graphic-design".to_string(),
                title: pick(lang, "Graphic Design", "Grafikdesign"),
                description: pick(
                    lang,
                    "We create visual identities that capture your brand essence and communicate your values effectively. From logos to complete brand guidelines.",
                    "Wir erstellen visuelle Identitäten, die Ihr Markenwesen erfassen und Ihre Werte effektiv kommunizieren. Von Logos bis hin zu kompletten Markenrichtlinien.",
                ),
                icon: ServiceIcon::Palette,
                packages: Some(strings(&["Logo Design", "Brand Guidelines", "Print Materials"])),
            },
            Service {
                id: "web-design".to_string(),
                title: pick(lang, "Web Design", "Webdesign"),
                description: pick(
                    lang,
                    "Modern, responsive websites built with cutting-edge technology and optimized for performance. User-friendly designs that convert.",
                    "Moderne, responsive Websites mit modernster Technologie und optimiert für Leistung. Benutzerfreundliche Designs, die konvertieren.",
                ),
                icon: ServiceIcon::Code,
                packages: Some(strings(&["Responsive Design", "E-commerce", "CMS Integration"])),
            },
            Service {
                id: "development".to_string(),
                title: pick(lang, "Development", "Entwicklung"),
                description: pick(
                    lang,
                    "Complete development solutions from frontend to backend. Scalable applications using cutting-edge frameworks and technologies.",
                    "Vollständige Entwicklungslösungen von Frontend bis Backend. Skalierbare Anwendungen mit modernsten Frameworks und Technologien.",
                ),
                icon: ServiceIcon::Wrench,
                packages: Some(strings(&["Web Applications", "Mobile Apps", "API Development"])),
            },
            Service {
                id: "print".to_string(),
                title: pick(lang, "Print", "Druck"),
                description: pick(
                    lang,
                    "High-quality print solutions for all your marketing materials. From business cards to large-format displays.",
                    "Hochwertige Drucklösungen für alle Ihre Marketingmaterialien. Von Visitenkarten bis hin zu großformatigen Displays.",
                ),
                icon: ServiceIcon::Printer,
                packages: Some(strings(&["Business Cards", "Brochures", "Large Format"])),
            },
        ]
    }

    pub fn team(&self) -> Vec<TeamMember> {
        let lang = self.language;
        let social = |linkedin: bool, twitter: bool, github: bool| {
            let link = |on: bool| on.then(|| "#".to_string());
            Some(SocialLinks {
                linkedin: link(linkedin),
                twitter: link(twitter),
                github: link(github),
            })
        };

        vec![
            TeamMember {
                id: "ceo".to_string(),
                name: "Sarah Chen".to_string(),
                position: pick(lang, "CEO & Creative Director", "CEO & Kreativdirektorin"),
                bio: pick(
                    lang,
                    "15+ years of experience at leading tech companies like Google and Apple. Specializes in brand development and digital transformation.",
                    "15+ Jahre Erfahrung bei führenden Tech-Unternehmen wie Google und Apple. Spezialisiert auf Markenentwicklung und digitale Transformation.",
                ),
                image: "/professional-ceo-portrait.png".to_string(),
                experience: "15+ years".to_string(),
                specialties: strings(&["Brand Strategy", "Digital Transformation", "Team Leadership"]),
                social: social(true, true, false),
            },
            TeamMember {
                id: "cto".to_string(),
                name: "Marcus Rodriguez".to_string(),
                position: "CTO & Lead Developer".to_string(),
                bio: pick(
                    lang,
                    "Former Senior Engineer at Meta and Netflix. Expert in scalable architectures and modern web technologies.",
                    "Ehemaliger Senior Engineer bei Meta und Netflix. Experte für skalierbare Architekturen und moderne Web-Technologien.",
                ),
                image: "/professional-man-cto-developer-portrait.jpg".to_string(),
                experience: "12+ years".to_string(),
                specialties: strings(&["Full-Stack Development", "Cloud Architecture", "DevOps"]),
                social: social(true, false, true),
            },
            TeamMember {
                id: "design-lead".to_string(),
                name: "Elena Kowalski".to_string(),
                position: "Design Lead".to_string(),
                bio: pick(
                    lang,
                    "Award-winning designer with experience at Airbnb and Spotify. Specializes in UX/UI design and design systems.",
                    "Preisgekrönte Designerin mit Erfahrung bei Airbnb und Spotify. Spezialisiert auf UX/UI Design und Design Systems.",
                ),
                image: "/professional-woman-designer.png".to_string(),
                experience: "10+ years".to_string(),
                specialties: strings(&["UX/UI Design", "Design Systems", "User Research"]),
                social: social(true, true, false),
            },
            TeamMember {
                id: "brand-strategist".to_string(),
                name: "David Kim".to_string(),
                position: "Brand Strategist".to_string(),
                bio: pick(
                    lang,
                    "Former Creative Director at Ogilvy and BBDO. Expert in brand positioning and integrated campaigns.",
                    "Ehemaliger Creative Director bei Ogilvy und BBDO. Experte für Markenpositionierung und integrierte Kampagnen.",
                ),
                image: "/professional-man-brand-strategist-portrait.jpg".to_string(),
                experience: "14+ years".to_string(),
                specialties: strings(&["Brand Positioning", "Creative Strategy", "Campaign Development"]),
                social: social(true, false, false),
            },
            TeamMember {
                id: "frontend-dev".to_string(),
                name: "Zoe Thompson".to_string(),
                position: "Senior Frontend Developer".to_string(),
                bio: pick(
                    lang,
                    "React specialist with experience at Shopify and GitHub. Focus on performance optimization and modern frontend architectures.",
                    "React-Spezialistin mit Erfahrung bei Shopify und GitHub. Fokus auf Performance-Optimierung und moderne Frontend-Architekturen.",
                ),
                image: "/professional-woman-frontend-developer-portrait.jpg".to_string(),
                experience: "8+ years".to_string(),
                specialties: strings(&["React/Next.js", "Performance Optimization", "TypeScript"]),
                social: social(false, true, true),
            },
            TeamMember {
                id: "marketing-lead".to_string(),
                name: "Alex Patel".to_string(),
                position: "Marketing Lead".to_string(),
                bio: pick(
                    lang,
                    "Digital marketing expert with experience at HubSpot and Salesforce. Specializes in growth hacking and data-driven strategies.",
                    "Digital Marketing Experte mit Erfahrung bei HubSpot und Salesforce. Spezialisiert auf Growth Hacking und datengetriebene Strategien.",
                ),
                image: "/professional-person-marketing-lead-portrait.jpg".to_string(),
                experience: "9+ years".to_string(),
                specialties: strings(&["Growth Marketing", "Analytics", "Conversion Optimization"]),
                social: social(true, true, false),
            },
        ]
    }

    pub fn pricing(&self) -> Vec<PricingPlan> {
        vec![
            PricingPlan {
                id: "starter".to_string(),
                name: "Starter".to_string(),
                price: 100.0,
                currency: "$".to_string(),
                period: "month".to_string(),
                description: "Perfect for small businesses and startups looking to establish their brand presence.".to_string(),
                features: strings(&[
                    "10 Social Media Posts per month",
                    "Basic Brand Guidelines",
                    "Logo Design (1 concept)",
                    "Email Support",
                    "1 Revision Round",
                    "Basic Analytics Report",
                ]),
                popular: false,
                icon: PlanIcon::Zap,
                button_text: "Get Started".to_string(),
                button_variant: ButtonVariant::Outline,
            },
            PricingPlan {
                id: "basic".to_string(),
                name: "Basic".to_string(),
                price: 150.0,
                currency: "$".to_string(),
                period: "month".to_string(),
                description: "Ideal for growing businesses that need comprehensive design and marketing support.".to_string(),
                features: strings(&[
                    "20 Social Media Posts per month",
                    "Complete Brand Identity Package",
                    "Logo Design (3 concepts)",
                    "Website Landing Page",
                    "Priority Email Support",
                    "3 Revision Rounds",
                    "Monthly Analytics Report",
                    "Basic SEO Optimization",
                ]),
                popular: true,
                icon: PlanIcon::Star,
                button_text: "Most Popular".to_string(),
                button_variant: ButtonVariant::Default,
            },
            PricingPlan {
                id: "golden".to_string(),
                name: "Golden".to_string(),
                price: 200.0,
                currency: "$".to_string(),
                period: "month".to_string(),
                description: "Premium solution for established businesses requiring full-service creative support.".to_string(),
                features: strings(&[
                    "Unlimited Social Media Posts",
                    "Complete Brand Strategy",
                    "Logo Design (5 concepts)",
                    "Full Website Development",
                    "24/7 Priority Support",
                    "Unlimited Revisions",
                    "Weekly Analytics Reports",
                    "Advanced SEO & Marketing",
                    "Dedicated Account Manager",
                    "Print Design Materials",
                ]),
                popular: false,
                icon: PlanIcon::Crown,
                button_text: "Go Premium".to_string(),
                button_variant: ButtonVariant::Secondary,
            },
        ]
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        vec![
            Testimonial {
                id: "1".to_string(),
                name: "Bahram Meghdari".to_string(),
                position: "CEO".to_string(),
                company: "TechVision Solutions".to_string(),
                content: "Paradaim transformed our brand identity completely. Their innovative approach and attention to detail exceeded our expectations. The team's expertise in both design and development created a cohesive brand experience that resonates with our audience.".to_string(),
                rating: 5,
                image: "/professional-business-person.png".to_string(),
            },
            Testimonial {
                id: "2".to_string(),
                name: "Sarah Chen".to_string(),
                position: "Marketing Director".to_string(),
                company: "Global Innovations Inc".to_string(),
                content: "Working with Paradaim was a game-changer for our digital presence. Their strategic thinking and creative execution helped us stand out in a crowded market. The results speak for themselves - 300% increase in engagement.".to_string(),
                rating: 5,
                image: "/professional-woman-executive.png".to_string(),
            },
            Testimonial {
                id: "3".to_string(),
                name: "Marcus Rodriguez".to_string(),
                position: "Founder".to_string(),
                company: "StartupLab".to_string(),
                content: "The Paradaim team brought our vision to life with incredible precision. Their newly formed company might be young, but their experience shows in every detail. They delivered beyond what we imagined possible.".to_string(),
                rating: 5,
                image: "/startup-founder-professional.jpg".to_string(),
            },
        ]
    }

    pub fn projects(&self) -> Vec<Project> {
        fn project(
            n: &str,
            title: &str,
            description: &str,
            image: &str,
            category: &str,
            tags: &[&str],
        ) -> Project {
            Project {
                id: format!("awesome-project-{}", n),
                title: title.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                category: category.to_string(),
                tags: strings(tags),
                url: Some("#".to_string()),
            }
        }

        vec![
            project(
                "1",
                "Awesome Project Alpha",
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation.",
                "/modern-web-design-project.jpg",
                "Web Design",
                &["React", "TypeScript", "Tailwind"],
            ),
            project(
                "2",
                "Awesome Project Beta",
                "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate.",
                "/abstract-branding-elements.png",
                "Branding",
                &["Brand Identity", "Logo Design", "Print"],
            ),
            project(
                "3",
                "Awesome Project Gamma",
                "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. Sed ut perspiciatis unde omnis iste natus.",
                "/mobile-app-interface.png",
                "Mobile App",
                &["React Native", "UI/UX", "iOS"],
            ),
            project(
                "4",
                "Awesome Project Delta",
                "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni dolores eos qui ratione voluptatem sequi nesciunt.",
                "/ecommerce-website-design.png",
                "E-commerce",
                &["Next.js", "Stripe", "PostgreSQL"],
            ),
            project(
                "5",
                "Awesome Project Epsilon",
                "At vero eos et accusamus et iusto odio dignissimos ducimus qui blanditiis praesentium voluptatum deleniti atque corrupti quos dolores et quas molestias.",
                "/corporate-website-design.png",
                "Corporate",
                &["WordPress", "Custom Theme", "SEO"],
            ),
            project(
                "6",
                "Awesome Project Zeta",
                "Temporibus autem quibusdam et aut officiis debitis aut rerum necessitatibus saepe eveniet ut et voluptates repudiandae sint et molestiae non recusandae.",
                "/startup-landing-page.png",
                "Startup",
                &["Vue.js", "Animation", "Conversion"],
            ),
        ]
    }
}

const FUTURE_OF_WEB_DESIGN_BODY: &str = r#"
<h2>The Evolution of Web Design</h2>
<p>Web design has come a long way since the early days of the internet. As we move into 2025, we're seeing unprecedented changes in how users interact with digital interfaces and what they expect from their online experiences.</p>

<h3>AI-Powered Interfaces</h3>
<p>Artificial intelligence is revolutionizing web design by enabling more personalized and intuitive user experiences. From chatbots that understand context to interfaces that adapt to user behavior, AI is making websites smarter and more responsive.</p>

<h3>Sustainable Design Practices</h3>
<p>Environmental consciousness is driving a new wave of sustainable design practices. Designers are now considering the carbon footprint of their websites, optimizing for energy efficiency, and creating designs that load faster and consume less bandwidth.</p>

<h3>Immersive Experiences</h3>
<p>With the advancement of WebGL and WebXR technologies, we're seeing more immersive experiences being integrated into traditional websites. These technologies allow for 3D interactions and virtual reality experiences directly in the browser.</p>

<h2>Key Trends to Watch</h2>
<ul>
  <li>Micro-interactions and subtle animations</li>
  <li>Dark mode as a standard feature</li>
  <li>Voice user interfaces</li>
  <li>Augmented reality integration</li>
  <li>Minimalist and clean designs</li>
</ul>

<h2>Conclusion</h2>
<p>The future of web design is exciting and full of possibilities. By staying informed about these trends and continuously learning new technologies, designers can create experiences that not only meet user expectations but exceed them.</p>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_is_idempotent() {
        let provider = FallbackProvider::new(Language::En);
        assert_eq!(provider.articles(), provider.articles());
        assert_eq!(provider.services(), provider.services());
        assert_eq!(provider.team(), provider.team());
        assert_eq!(provider.pricing(), provider.pricing());
        assert_eq!(provider.testimonials(), provider.testimonials());
        assert_eq!(provider.projects(), provider.projects());
        assert_eq!(
            provider.article("future-of-web-design"),
            provider.article("future-of-web-design")
        );
    }

    #[test]
    fn test_article_slugs_are_unique() {
        let articles = FallbackProvider::default().articles();
        let slugs: HashSet<_> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs.len(), articles.len());
    }

    #[test]
    fn test_at_most_one_popular_plan() {
        let popular = FallbackProvider::default()
            .pricing()
            .into_iter()
            .filter(|p| p.popular)
            .count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn test_services_and_team_are_localized() {
        let en = FallbackProvider::new(Language::En);
        let de = FallbackProvider::new(Language::De);

        assert_eq!(en.services()[0].title, "Graphic Design");
        assert_eq!(de.services()[0].title, "Grafikdesign");
        assert_eq!(de.team()[0].position, "CEO & Kreativdirektorin");
        // 非本地化類別兩種語言相同
        assert_eq!(en.pricing(), de.pricing());
        assert_eq!(en.services().len(), de.services().len());
    }

    #[test]
    fn test_single_article_lookup() {
        let provider = FallbackProvider::default();
        let article = provider.article("future-of-web-design").unwrap();
        assert_eq!(article.tags.len(), 5);
        assert!(!article.author.bio.is_empty());
        assert!(provider.article("does-not-exist").is_none());
        assert!(provider.related_articles().is_empty());
    }

    #[test]
    fn test_latest_articles_are_first_four() {
        let provider = FallbackProvider::default();
        let latest = provider.latest_articles();
        assert_eq!(latest.len(), 4);
        assert_eq!(latest[..], provider.articles()[..4]);
    }

    #[test]
    fn test_fallback_round_trips_through_json() {
        // 備援資料必須與遠端 JSON 形狀一致
        let provider = FallbackProvider::default();
        let json = serde_json::to_value(provider.pricing()).unwrap();
        assert_eq!(json[1]["buttonVariant"], "default");
        let decoded: Vec<PricingPlan> = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, provider.pricing());
    }
}
