//! Home Page
//!
//! Hero with stars and parallax cards, stats and program cards.

use leptos::*;
use leptos_router::*;

use crate::components::{HeroCard, ParallaxCards, RevealScope, SmoothAnchor, StatCounter, Stars};

const HERO_CARDS: &[HeroCard] = &[
    HeroCard { icon: "🎓", title: "Certified Programs" },
    HeroCard { icon: "💼", title: "Career Placement" },
    HeroCard { icon: "🌍", title: "Global Community" },
];

const PROGRAMS: &[(&str, &str, &str)] = &[
    ("📊", "Business Analytics", "Turn data into decisions with hands-on projects."),
    ("💻", "Software Development", "Build real products from the first week."),
    ("🎨", "Digital Design", "Design interfaces people enjoy using."),
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <RevealScope class="home">
            <section class="hero">
                <Stars />
                <div class="hero-content">
                    <h1>"From Ambition to Profession"</h1>
                    <p>"Practical programs, mentors from the industry and a path to your next role."</p>
                    <div class="hero-actions">
                        <A href="/register" class="btn-primary">"Apply Now"</A>
                        <SmoothAnchor href="#programs" class="btn-secondary">"Explore Programs"</SmoothAnchor>
                    </div>
                </div>
                <ParallaxCards cards=HERO_CARDS />
            </section>

            <section class="stats">
                <StatCounter value="500+" label="Students Trained" />
                <StatCounter value="25+" label="Industry Mentors" />
                <StatCounter value="90+" label="Placement Partners" />
            </section>

            <section id="programs" class="programs">
                <h2>"Our Programs"</h2>
                <div class="program-grid">
                    {PROGRAMS
                        .iter()
                        .map(|&(icon, title, blurb)| view! {
                            <div class="card-3d">
                                <div class="card-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="featured">
                <div class="featured-card">
                    <h2>"Ready to start?"</h2>
                    <p>"Applications are reviewed on a rolling basis."</p>
                    <A href="/contact" class="btn-secondary">"Talk to Us"</A>
                </div>
            </section>
        </RevealScope>
    }
}
