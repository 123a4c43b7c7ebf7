use yew::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactSection;
use crate::components::hero::HeroSection;
use crate::components::products::ProductShowcase;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <HeroSection />
            <ProductShowcase />
            <ContactSection />
            <AboutSection />
            <footer class="site-footer">
                <style>
                    {r#"
                        .site-footer {
                            background: #111827;
                            color: #9ca3af;
                            text-align: center;
                            padding: 2rem 1rem;
                            font-size: 0.875rem;
                        }
                        .site-footer a {
                            color: #9ca3af;
                            margin: 0 0.5rem;
                        }
                    "#}
                </style>
                <div>
                    <a href="/terms-of-service-autonerds-ai">{"Terms of Service"}</a>
                    <a href="/privacy-policy-autonerds-ai">{"Privacy Policy"}</a>
                </div>
                <p>{"© 2025 YeahScene AI"}</p>
            </footer>
        </main>
    }
}
