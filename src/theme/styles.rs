//! Global CSS styles for Flashgrid.
//!
//! Card sizes come from the preset custom properties published on
//! `:root`; their defaults are emitted separately from the base preset,
//! together with `--flip-half` from the flip timing.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties (non-preset) === */
:root {
  /* PAPER */
  --paper: #faf7f0;
  --paper-dark: #efe8d8;
  --ink: #2b2a27;
  --ink-muted: rgba(43, 42, 39, 0.6);

  /* ACCENTS */
  --accent: #c0563b;
  --accent-soft: rgba(192, 86, 59, 0.15);
  --leaf: #4f7a5a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-script: 'Noto Naskh Arabic', 'Noto Nastaliq Urdu', serif;

  /* Set from the caption height once laid out */
  --back-height: calc(var(--card-height) + 4rem);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  font-size: var(--font-base);
  background: var(--paper);
  color: var(--ink);
  padding: 0 48px 48px;
  min-height: 100vh;
}

@media (max-width: 720px) {
  body {
    padding: 0 16px 32px;
  }
}

/* === Header === */
.page-header {
  position: sticky;
  top: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem 0;
  background: var(--paper);
  border-bottom: 1px solid var(--paper-dark);
}

.page-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-right: auto;
}

.sidebar-toggle,
.row-selector,
.main-btn,
.sub-btn,
.scroll-btn {
  font: inherit;
  font-size: var(--font-small);
  color: var(--ink);
  background: white;
  border: 1px solid var(--paper-dark);
  border-radius: 8px;
  padding: 0.4rem 0.8rem;
  cursor: pointer;
}

/* === Language Dropdowns === */
.dropdown {
  position: relative;
}

.main-btn .arrow {
  display: inline-block;
  transition: transform 150ms ease;
}

.main-btn.open .arrow {
  transform: rotate(180deg);
}

.sub-btn {
  display: none;
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  width: 100%;
}

.main-btn.open + .sub-btn {
  display: block;
}

/* === Sidebar === */
.sidebar {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  width: 240px;
  z-index: 30;
  padding: 1.5rem 1rem;
  background: white;
  box-shadow: 4px 0 24px rgba(0, 0, 0, 0.08);
  transform: translateX(-100%);
  transition: transform 250ms ease;
}

.sidebar.open {
  transform: translateX(0);
}

.sidebar-nav {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-top: 1rem;
}

.scroll-btn {
  text-align: left;
}

/* === Sections === */
.deck-section {
  padding-top: 2rem;
  scroll-margin-top: 5rem;
}

.deck-section__title {
  font-size: var(--font-plural);
  margin-bottom: var(--gap);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(var(--grid-min), 1fr));
  gap: var(--gap);
}

/* === Card === */
.card {
  width: var(--card-width);
  max-width: 100%;
  justify-self: center;
  border-radius: var(--radius);
  background: white;
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.06);
  overflow: hidden;
  transition: transform var(--flip-half) ease-in;
}

.card.flipping {
  transform: scaleX(0);
}

.card-media {
  height: var(--card-height);
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--paper-dark);
  cursor: pointer;
}

.emoji,
.emoji-alt {
  font-size: var(--emoji-size);
  line-height: 1;
}

.thumb,
.thumb-alt {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.emoji-alt,
.thumb-alt,
body.show-urd .card-media.has-alt .emoji,
body.show-urd .card-media.has-alt .thumb {
  display: none;
}

body.show-urd .card-media.has-alt .emoji-alt,
body.show-urd .card-media.has-alt .thumb-alt {
  display: block;
}

/* === Caption (front) === */
.front {
  display: flex;
  justify-content: space-between;
  gap: 0.5rem;
  padding: var(--caption-padding);
  font-size: var(--caption-font);
  border-radius: 0 0 var(--caption-radius) var(--caption-radius);
  cursor: pointer;
}

.lang-script {
  font-family: var(--font-script);
  direction: rtl;
}

.lang-urd,
.lang-per,
body.show-urd .lang-en,
body.show-per .lang-ar {
  display: none;
}

body.show-urd .lang-urd,
body.show-per .lang-per {
  display: inline;
}

/* === Back === */
.back {
  display: none;
  height: var(--back-height);
  padding: var(--caption-padding);
  flex-direction: column;
  justify-content: center;
  text-align: center;
}

.card.show-back .card-media,
.card.show-back .front {
  display: none;
}

.card.show-back .back {
  display: flex;
}

.plural {
  font-family: var(--font-script);
  font-size: var(--font-plural);
  margin-bottom: var(--plural-margin-bottom);
  padding-bottom: var(--plural-padding-bottom);
  border-bottom: var(--plural-border-width) solid var(--accent-soft);
}

.plural-label {
  display: block;
  font-family: var(--font-sans);
  font-size: var(--font-label);
  color: var(--ink-muted);
}

.sentence {
  margin-top: var(--sentence-margin-top);
  font-size: var(--font-small);
  color: var(--ink-muted);
}
"#;
