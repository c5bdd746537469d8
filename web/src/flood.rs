use crate::canvas::{MouseButtons, Painter, event_to_cell, rgb_style};
use crate::utils::js_random_seed;
use floodgrid_core as game;
use game::{CellColor, FloodPuzzle, PuzzleConfig, RandomGridGenerator};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 450;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(game::Coord2),
    SelectColor(&'static str),
    Undo,
    Transpose,
    Restart,
    NewGame,
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct FloodProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Flood-fill puzzle drawn on a canvas, with palette and history controls.
#[derive(Debug)]
pub(crate) struct FloodView {
    puzzle: FloodPuzzle,
    config: PuzzleConfig,
    canvas: NodeRef,
}

impl FloodView {
    fn generator(seed: u64) -> RandomGridGenerator {
        log::debug!("seed: {}", seed);
        RandomGridGenerator::with_full_palette(seed)
    }

    fn paint(&self) {
        let grid = self.puzzle.grid();
        let Some(painter) = Painter::from_ref(&self.canvas, grid.size()) else {
            return;
        };
        for (coords, color) in grid.iter_cells() {
            painter.fill_cell(coords, color.rgb());
        }
    }

    fn palette_view(&self, ctx: &Context<Self>) -> Html {
        let selected = self.puzzle.replacement_color();

        html! {
            <nav class="palette">
                {
                    for CellColor::ALL.into_iter().map(|color| {
                        let name = color.name();
                        let class = classes!("color-select", (color == selected).then_some("selected"));
                        let style = format!("background-color: {}", rgb_style(color.rgb()));
                        let onmousedown = ctx.link().callback(move |_: MouseEvent| Msg::SelectColor(name));
                        html! {
                            <button {class} {name} {style} title={name} {onmousedown}/>
                        }
                    })
                }
            </nav>
        }
    }
}

impl Component for FloodView {
    type Message = Msg;
    type Properties = FloodProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = PuzzleConfig::default();
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);

        Self {
            puzzle: FloodPuzzle::generate(Self::generator(seed), config),
            config,
            canvas: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClicked(coords) => {
                log::debug!("fill at {:?}", coords);
                self.puzzle.apply_move(coords).has_update()
            }
            SelectColor(name) => match self.puzzle.select_color_by_name(name) {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("cannot select {:?}: {}", name, err);
                    false
                }
            },
            Undo => self.puzzle.undo(),
            Transpose => {
                self.puzzle.transpose();
                true
            }
            Restart => {
                self.puzzle.restart();
                true
            }
            NewGame => {
                self.puzzle
                    .new_game(Self::generator(js_random_seed()), self.config);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let size = self.puzzle.size();
        let onmousedown = ctx.link().batch_callback(move |e: MouseEvent| {
            if !MouseButtons::from_event(&e).contains(MouseButtons::LEFT) {
                return None;
            }
            let canvas: HtmlCanvasElement = e.target_dyn_into()?;
            Some(CellClicked(event_to_cell(&e, &canvas, size)))
        });

        let cb_undo = ctx.link().callback(|_: MouseEvent| Undo);
        let cb_rotate = ctx.link().callback(|_: MouseEvent| Transpose);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);

        html! {
            <div class="floodgrid flood">
                <canvas
                    ref={self.canvas.clone()}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    {onmousedown}
                />
                { self.palette_view(ctx) }
                <nav class="controls">
                    <button id="undo" onmousedown={cb_undo}>{"Undo"}</button>
                    <button id="rotate" onmousedown={cb_rotate}>{"Rotate"}</button>
                    <button id="restart" onmousedown={cb_restart}>{"Restart"}</button>
                    <button id="new-game" onmousedown={cb_new_game}>{"New"}</button>
                </nav>
                <p>
                    {"Score: "}
                    <span id="score-text">{ self.puzzle.score() }</span>
                    {" / "}
                    { self.puzzle.max_score() }
                </p>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.paint();
    }
}
