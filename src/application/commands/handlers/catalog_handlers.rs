//! Catalog Command Handlers

use crate::application::commands::{
    AddArticle, ChangeCategory, CreateAuthor, CreateMagazine, ReassignAuthor, ReassignMagazine,
    RenameMagazine, TransferArticle,
};
use crate::application::error::ApplicationError;
use crate::domain::{ArticleId, AuthorId, Catalog, MagazineId};

/// 命令处理器
pub trait CommandHandler<C> {
    type Response;

    fn handle(&mut self, command: C) -> Result<Self::Response, ApplicationError>;
}

/// 在一个 Catalog 上执行所有写命令
pub struct CatalogCommandHandler<'a> {
    catalog: &'a mut Catalog,
}

impl<'a> CatalogCommandHandler<'a> {
    pub fn new(catalog: &'a mut Catalog) -> Self {
        Self { catalog }
    }
}

impl CommandHandler<CreateAuthor> for CatalogCommandHandler<'_> {
    type Response = AuthorId;

    fn handle(&mut self, command: CreateAuthor) -> Result<AuthorId, ApplicationError> {
        Ok(self.catalog.add_author(command.name)?)
    }
}

impl CommandHandler<CreateMagazine> for CatalogCommandHandler<'_> {
    type Response = MagazineId;

    fn handle(&mut self, command: CreateMagazine) -> Result<MagazineId, ApplicationError> {
        Ok(self.catalog.add_magazine(command.name, command.category)?)
    }
}

impl CommandHandler<AddArticle> for CatalogCommandHandler<'_> {
    type Response = ArticleId;

    fn handle(&mut self, command: AddArticle) -> Result<ArticleId, ApplicationError> {
        Ok(self
            .catalog
            .add_article(command.author_id, command.magazine_id, command.title)?)
    }
}

impl CommandHandler<RenameMagazine> for CatalogCommandHandler<'_> {
    type Response = ();

    fn handle(&mut self, command: RenameMagazine) -> Result<(), ApplicationError> {
        Ok(self
            .catalog
            .rename_magazine(command.magazine_id, command.name)?)
    }
}

impl CommandHandler<ChangeCategory> for CatalogCommandHandler<'_> {
    type Response = ();

    fn handle(&mut self, command: ChangeCategory) -> Result<(), ApplicationError> {
        Ok(self
            .catalog
            .set_magazine_category(command.magazine_id, command.category)?)
    }
}

impl CommandHandler<ReassignAuthor> for CatalogCommandHandler<'_> {
    type Response = ();

    fn handle(&mut self, command: ReassignAuthor) -> Result<(), ApplicationError> {
        Ok(self
            .catalog
            .set_article_author(command.article_id, command.author_id)?)
    }
}

impl CommandHandler<ReassignMagazine> for CatalogCommandHandler<'_> {
    type Response = ();

    fn handle(&mut self, command: ReassignMagazine) -> Result<(), ApplicationError> {
        Ok(self
            .catalog
            .set_article_magazine(command.article_id, command.magazine_id)?)
    }
}

impl CommandHandler<TransferArticle> for CatalogCommandHandler<'_> {
    type Response = ();

    fn handle(&mut self, command: TransferArticle) -> Result<(), ApplicationError> {
        Ok(self
            .catalog
            .transfer_article(command.article_id, command.magazine_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_flow() {
        let mut catalog = Catalog::new();
        let mut handler = CatalogCommandHandler::new(&mut catalog);

        let sue = handler
            .handle(CreateAuthor {
                name: "Sue".to_string(),
            })
            .unwrap();
        let vogue = handler
            .handle(CreateMagazine {
                name: "Vogue".to_string(),
                category: "Fashion".to_string(),
            })
            .unwrap();
        let elle = handler
            .handle(CreateMagazine {
                name: "Elle".to_string(),
                category: "Style".to_string(),
            })
            .unwrap();
        let article = handler
            .handle(AddArticle {
                author_id: sue,
                magazine_id: vogue,
                title: "Autumn Styles 2024".to_string(),
            })
            .unwrap();
        handler
            .handle(RenameMagazine {
                magazine_id: vogue,
                name: "Vogue UK".to_string(),
            })
            .unwrap();
        handler
            .handle(ChangeCategory {
                magazine_id: vogue,
                category: "Couture".to_string(),
            })
            .unwrap();
        handler
            .handle(TransferArticle {
                article_id: article,
                magazine_id: elle,
            })
            .unwrap();

        assert_eq!(catalog.magazine(vogue).unwrap().name().as_str(), "Vogue UK");
        assert_eq!(catalog.magazine(vogue).unwrap().category().as_str(), "Couture");
        assert_eq!(catalog.magazine(elle).unwrap().articles(), &[article]);
    }

    #[test]
    fn test_command_errors_are_mapped() {
        let mut catalog = Catalog::new();
        let mut handler = CatalogCommandHandler::new(&mut catalog);

        let err = handler
            .handle(CreateMagazine {
                name: "A".to_string(),
                category: "Tech".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));

        let err = handler
            .handle(ReassignAuthor {
                article_id: ArticleId::new(),
                author_id: AuthorId::new(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Author",
                ..
            }
        ));

        let err = handler
            .handle(ReassignMagazine {
                article_id: ArticleId::new(),
                magazine_id: MagazineId::new(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound {
                resource_type: "Magazine",
                ..
            }
        ));
    }
}
