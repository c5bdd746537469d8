use crate::canvas::{MouseButtons, Painter, event_to_cell};
use crate::utils::announce;
use floodgrid_core as game;
use game::{BOARD_SIDE, GameResult, TicTacToe, board_index};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CANVAS_SIZE: u32 = 300;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(game::Coord2),
    Undo,
    Restart,
}

#[derive(Debug)]
pub(crate) struct TicTacToeView {
    game: TicTacToe,
    last_result: Option<GameResult>,
    canvas: NodeRef,
}

impl TicTacToeView {
    fn status(&self) -> String {
        match self.last_result {
            Some(result) => result.to_string(),
            None => format!("{} to move", self.game.current_player()),
        }
    }

    fn paint(&self) {
        let Some(painter) = Painter::from_ref(&self.canvas, BOARD_SIDE) else {
            return;
        };
        painter.clear();
        for (index, cell) in (0u8..).zip(self.game.board()) {
            let coords = (index / BOARD_SIDE, index % BOARD_SIDE);
            painter.stroke_cell(coords, "#000");
            if let Some(mark) = cell {
                painter.label_cell(coords, &mark.to_string());
            }
        }
    }
}

impl Component for TicTacToeView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            game: TicTacToe::new(),
            last_result: None,
            canvas: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClicked(coords) => {
                let Some(index) = board_index(coords) else {
                    return false;
                };
                let outcome = self.game.place_mark(index);
                log::debug!("mark on {}: {:?}", index, outcome);

                if let Some(result) = outcome.result() {
                    announce(&result.to_string());
                    self.last_result = Some(result);
                } else if outcome.has_update() {
                    self.last_result = None;
                }
                outcome.has_update()
            }
            Undo => self.game.undo(),
            Restart => {
                self.game.restart();
                self.last_result = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let onmousedown = ctx.link().batch_callback(|e: MouseEvent| {
            if !MouseButtons::from_event(&e).contains(MouseButtons::LEFT) {
                return None;
            }
            let canvas: HtmlCanvasElement = e.target_dyn_into()?;
            Some(CellClicked(event_to_cell(&e, &canvas, BOARD_SIDE)))
        });

        let cb_undo = ctx.link().callback(|_: MouseEvent| Undo);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);

        html! {
            <div class="floodgrid tictactoe">
                <canvas
                    ref={self.canvas.clone()}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    {onmousedown}
                />
                <nav class="controls">
                    <button id="undo" onmousedown={cb_undo}>{"Undo"}</button>
                    <button id="restart" onmousedown={cb_restart}>{"Restart"}</button>
                </nav>
                <p id="status-text">{ self.status() }</p>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.paint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TicTacToeView {
        TicTacToeView {
            game: TicTacToe::new(),
            last_result: None,
            canvas: NodeRef::default(),
        }
    }

    #[test]
    fn status_names_the_player_to_move() {
        let mut view = view();
        assert_eq!(view.status(), "X to move");

        view.game.place_mark(0);

        assert_eq!(view.status(), "O to move");
    }

    #[test]
    fn status_reports_the_last_result() {
        let mut view = view();
        view.last_result = Some(GameResult::Win(game::Mark::O));

        assert_eq!(view.status(), "O wins!");
    }
}
