//! The simulation session.

use log::info;
use rlifeboard_lib::{
    Cancel, Config, Error, GameBoard, GameStore, Template, TemplateStore, TurnOutcome,
    TurnScheduler,
};

/// Everything the front-end works with: the stores, the scheduler,
/// and the current game.
///
/// Created once at start-up and passed to whatever needs it.
pub(crate) struct Session {
    templates: Box<dyn TemplateStore>,
    games: Box<dyn GameStore>,
    scheduler: TurnScheduler,
    board: Option<GameBoard>,
}

impl Session {
    /// Creates a session with the file stores described by `config`.
    pub(crate) fn new(config: &Config) -> Self {
        Session::with_stores(
            config,
            Box::new(config.template_store()),
            Box::new(config.game_store()),
        )
    }

    pub(crate) fn with_stores(
        config: &Config,
        templates: Box<dyn TemplateStore>,
        games: Box<dyn GameStore>,
    ) -> Self {
        Session {
            templates,
            games,
            scheduler: config.scheduler(),
            board: None,
        }
    }

    /// The current game, if any.
    pub(crate) fn board(&self) -> Option<&GameBoard> {
        self.board.as_ref()
    }

    pub(crate) fn list_templates(&self) -> Result<Vec<String>, Error> {
        self.templates.list()
    }

    pub(crate) fn load_template(&self, name: &str) -> Result<Template, Error> {
        self.templates.load(name)
    }

    pub(crate) fn save_template(&self, template: &Template) -> Result<(), Error> {
        self.templates.save(template)
    }

    /// Starts a new game with `template` at column `x`, row `y`.
    ///
    /// The current game is only replaced if the new one could be set up.
    pub(crate) fn new_game(
        &mut self,
        template: &Template,
        height: usize,
        width: usize,
        x: usize,
        y: usize,
    ) -> Result<(), Error> {
        let mut board = GameBoard::new(height, width)?;
        board.insert_template(template, x, y)?;
        info!(
            "New {}x{} game with {:?} at ({}, {})",
            width,
            height,
            template.name(),
            x,
            y
        );
        self.board = Some(board);
        Ok(())
    }

    /// Resumes the saved game. Returns `false` if there is none.
    pub(crate) fn load_game(&mut self) -> Result<bool, Error> {
        match self.games.load()? {
            Some(board) => {
                self.board = Some(board);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Saves the current game, if there is one.
    pub(crate) fn save_game(&self) -> Result<(), Error> {
        match &self.board {
            Some(board) => self.games.save(board),
            None => Ok(()),
        }
    }

    /// Runs turns until `cancel` fires, or until `limit` turns have been
    /// applied.
    ///
    /// `draw` is called with the board before every turn. Returns the
    /// number of turns applied.
    pub(crate) async fn play<C, F, E>(
        &mut self,
        cancel: &C,
        limit: Option<u64>,
        mut draw: F,
    ) -> Result<u64, E>
    where
        C: Cancel,
        F: FnMut(&GameBoard) -> Result<(), E>,
    {
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return Ok(0),
        };
        let mut turns = 0;
        while !cancel.is_cancelled() && limit.map_or(true, |limit| turns < limit) {
            draw(board)?;
            match self.scheduler.advance_turn(board, cancel).await {
                TurnOutcome::Advanced => turns += 1,
                TurnOutcome::Cancelled => break,
            }
        }
        info!("Stopped after {} turns", turns);
        Ok(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlifeboard_lib::{CancellationToken, ErrorKind, Never};
    use std::{cell::RefCell, convert::Infallible, rc::Rc, time::Duration};

    #[derive(Default)]
    struct MemoryTemplates(RefCell<Vec<Template>>);

    impl TemplateStore for MemoryTemplates {
        fn list(&self) -> Result<Vec<String>, Error> {
            Ok(self.0.borrow().iter().map(|t| t.name().to_owned()).collect())
        }

        fn load(&self, name: &str) -> Result<Template, Error> {
            self.0
                .borrow()
                .iter()
                .find(|t| t.name() == name)
                .cloned()
                .ok_or_else(|| Error::TemplateNotFound(name.to_owned()))
        }

        fn save(&self, template: &Template) -> Result<(), Error> {
            self.0.borrow_mut().push(template.clone());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MemoryGames(Rc<RefCell<Option<GameBoard>>>);

    impl GameStore for MemoryGames {
        fn load(&self) -> Result<Option<GameBoard>, Error> {
            Ok(self.0.borrow().clone())
        }

        fn save(&self, board: &GameBoard) -> Result<(), Error> {
            *self.0.borrow_mut() = Some(board.clone());
            Ok(())
        }
    }

    fn session(games: MemoryGames) -> Session {
        let config = Config::default().set_turn_interval(Duration::from_millis(100));
        Session::with_stores(
            &config,
            Box::new(MemoryTemplates::default()),
            Box::new(games),
        )
    }

    fn blinker() -> Template {
        Template::from_plaintext("blinker", "OOO\n...").unwrap()
    }

    #[test]
    fn new_game() {
        let mut session = session(MemoryGames::default());
        session.new_game(&blinker(), 5, 5, 1, 2).unwrap();
        assert_eq!(
            session.board().unwrap().to_string(),
            ".....\n.....\n.OOO.\n.....\n.....\n"
        );

        let err = session.new_game(&blinker(), 5, 5, 3, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = session.new_game(&blinker(), 2, 5, 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        // Failed attempts keep the previous game.
        assert_eq!(session.board().unwrap().live_count(), 3);
    }

    #[test]
    fn templates() {
        let session = session(MemoryGames::default());
        session.save_template(&blinker()).unwrap();
        assert_eq!(session.list_templates().unwrap(), vec!["blinker"]);
        assert_eq!(session.load_template("blinker").unwrap(), blinker());
    }

    #[test]
    fn save_and_resume() {
        let games = MemoryGames::default();
        let mut session = session(games.clone());
        assert!(!session.load_game().unwrap());
        session.save_game().unwrap();
        assert!(games.0.borrow().is_none());

        session.new_game(&blinker(), 5, 5, 1, 2).unwrap();
        session.save_game().unwrap();

        let mut resumed = self::session(games);
        assert!(resumed.load_game().unwrap());
        assert_eq!(resumed.board(), session.board());
    }

    #[tokio::test(start_paused = true)]
    async fn play_with_limit() {
        let mut session = session(MemoryGames::default());
        session.new_game(&blinker(), 5, 5, 1, 2).unwrap();
        let mut frames = Vec::new();
        let turns = session
            .play(&Never, Some(3), |board| {
                frames.push(board.to_string());
                Ok::<_, Infallible>(())
            })
            .await
            .unwrap();
        assert_eq!(turns, 3);
        assert_eq!(frames.len(), 3);
        assert_ne!(frames[0], frames[1]);
        assert_eq!(frames[0], frames[2]);
        assert_eq!(session.board().unwrap().generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn play_until_cancelled() {
        let mut session = session(MemoryGames::default());
        session.new_game(&blinker(), 5, 5, 1, 2).unwrap();
        let token = CancellationToken::new();
        let (turns, ()) = tokio::join!(
            session.play(&token, None, |_| Ok::<_, Infallible>(())),
            async {
                tokio::time::sleep(Duration::from_millis(250)).await;
                token.cancel();
            }
        );
        assert_eq!(turns.unwrap(), 2);
        assert_eq!(session.board().unwrap().generation(), 2);
    }

    #[tokio::test]
    async fn play_without_a_game() {
        let mut session = session(MemoryGames::default());
        let turns = session
            .play(&Never, None, |_| Ok::<_, Infallible>(()))
            .await
            .unwrap();
        assert_eq!(turns, 0);
    }
}
