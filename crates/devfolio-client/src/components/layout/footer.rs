//! Site footer.

use devfolio_core::content::{self, SOCIAL_LINKS, SocialKind};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

pub fn social_icon(kind: SocialKind) -> IconData {
    match kind {
        SocialKind::GitHub => IconData::LUCIDE_GITHUB,
        SocialKind::LinkedIn => IconData::LUCIDE_LINKEDIN,
        SocialKind::Twitter => IconData::LUCIDE_TWITTER,
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <h3 class="text-gradient">{ content::SITE_NAME }</h3>
                    <p class="muted">{ content::FOOTER_BLURB }</p>
                </div>

                <div>
                    <h4>{ "Quick Links" }</h4>
                    <ul class="quick-links">
                        { for content::quick_links().map(|item| html! {
                            <li key={item.name}>
                                <a href={format!("#{}", item.section)}>{ item.name }</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{ "Connect" }</h4>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.url} target="_blank" rel="noreferrer" aria-label={link.label}>
                                <Icon data={social_icon(link.kind)} width={"20px"} height={"20px"} />
                            </a>
                        }) }
                        <a href={format!("mailto:{}", content::CONTACT_INFO.email)} aria-label="Email">
                            <Icon data={IconData::LUCIDE_MAIL} width={"20px"} height={"20px"} />
                        </a>
                    </div>
                </div>
            </div>

            <div class="container footer-bottom">
                { format!("© {year} {}. All rights reserved.", content::SITE_NAME) }
            </div>
        </footer>
    }
}
