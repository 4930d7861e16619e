//! The portfolio page: every section stacked in navigation order.

use yew::prelude::*;

use crate::components::layout::{Footer, Header, ScrollToTop};
use crate::components::sections::{About, Contact, Experience, Hero, Projects, Resume, Skills};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home-page">
            <Header />
            <main>
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Projects />
                <Resume />
                <Contact />
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}
