//! DOM rendering surface
//!
//! Sprites are absolutely positioned `div`s inside `#arena`. Elements are
//! pooled: a frame reuses the previous frame's nodes and hides the leftovers,
//! so the tree only grows to the largest sprite count seen.

use web_sys::{Document, Element};

use super::{Scene, Surface};

pub struct DomSurface {
    document: Document,
    arena: Element,
    pool: Vec<Element>,
    /// Sprites shown last frame (pool entries past this are hidden)
    visible: usize,
    arena_sized: bool,
    show_debug: bool,
    last_score: Option<u64>,
    last_game_over: Option<bool>,
}

impl DomSurface {
    /// Attach to `#arena`. Returns `None` if the page has no arena element.
    pub fn new(document: Document, show_debug: bool) -> Option<Self> {
        let arena = document.get_element_by_id("arena")?;
        Some(Self {
            document,
            arena,
            pool: Vec::new(),
            visible: 0,
            arena_sized: false,
            show_debug,
            last_score: None,
            last_game_over: None,
        })
    }

    pub fn set_show_debug(&mut self, show: bool) {
        self.show_debug = show;
        if let Some(el) = self.document.get_element_by_id("hud-frame") {
            let _ = el.set_attribute("class", if show { "hud-item" } else { "hud-item hidden" });
        }
    }

    /// Get pool entry `index`, creating it on first use
    fn sprite_element(&mut self, index: usize) -> Option<&Element> {
        while self.pool.len() <= index {
            let el = match self.document.create_element("div") {
                Ok(el) => el,
                Err(e) => {
                    log::error!("Failed to create sprite element: {:?}", e);
                    return None;
                }
            };
            if let Err(e) = self.arena.append_child(&el) {
                log::error!("Failed to attach sprite element: {:?}", e);
                return None;
            }
            self.pool.push(el);
        }
        self.pool.get(index)
    }

    fn update_hud(&mut self, scene: &Scene) {
        if self.last_score != Some(scene.score) {
            if let Some(el) = self
                .document
                .query_selector("#hud-score .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&scene.score.to_string()));
            }
            self.last_score = Some(scene.score);
        }

        if self.show_debug {
            if let Some(el) = self
                .document
                .query_selector("#hud-frame .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&scene.frame.to_string()));
            }
        }

        // Show/hide game over
        if self.last_game_over != Some(scene.game_over) {
            if let Some(el) = self.document.get_element_by_id("game-over") {
                if scene.game_over {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = self.document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&scene.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
            self.last_game_over = Some(scene.game_over);
        }
    }
}

impl Surface for DomSurface {
    fn present(&mut self, scene: &Scene) {
        if !self.arena_sized {
            let style = format!(
                "width:{}px;height:{}px",
                scene.arena_width, scene.arena_height
            );
            let _ = self.arena.set_attribute("style", &style);
            self.arena_sized = true;
        }

        for (i, sprite) in scene.sprites.iter().enumerate() {
            let Some(el) = self.sprite_element(i) else {
                break;
            };
            let style = format!(
                "left:{}px;top:{}px;width:{}px;height:{}px",
                sprite.x, sprite.y, sprite.width, sprite.height
            );
            let _ = el.set_attribute("class", sprite.kind.css_class());
            let _ = el.set_attribute("style", &style);
        }

        let shown = scene.sprites.len().min(self.pool.len());
        for el in self.pool.iter().take(self.visible).skip(shown) {
            let _ = el.set_attribute("class", "sprite hidden");
        }
        self.visible = shown;

        self.update_hud(scene);
    }
}
