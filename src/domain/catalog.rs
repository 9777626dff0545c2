//! Catalog - 文章注册表
//!
//! 显式的注册表对象，持有全部作者、杂志和文章。
//! 生命周期由调用方决定（通常每次运行创建一次），没有隐式的全局状态，也没有重置操作。
//!
//! 所有修改操作都先完成校验和查找，再执行写入：失败的调用不会留下任何副作用。

use thiserror::Error;

use super::article::{Article, ArticleId, ArticleTitle};
use super::author::{Author, AuthorId, AuthorName};
use super::errors::ValidationError;
use super::magazine::{Category, Magazine, MagazineId, MagazineName};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("作者不存在: {0}")]
    AuthorNotFound(AuthorId),

    #[error("杂志不存在: {0}")]
    MagazineNotFound(MagazineId),

    #[error("文章不存在: {0}")]
    ArticleNotFound(ArticleId),
}

/// 作者 / 杂志 / 文章的内存关系图
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // 创建
    // ------------------------------------------------------------------------

    /// 创建作者
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId, ValidationError> {
        let author = Author::new(AuthorName::new(name)?);
        let id = author.id();
        tracing::info!(author_id = %id, name = %author.name(), "Author created");
        self.authors.push(author);
        Ok(id)
    }

    /// 创建杂志
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        let name = MagazineName::new(name)?;
        let category = Category::new(category)?;
        let magazine = Magazine::new(name, category);
        let id = magazine.id();
        tracing::info!(
            magazine_id = %id,
            name = %magazine.name(),
            category = %magazine.category(),
            "Magazine created"
        );
        self.magazines.push(magazine);
        Ok(id)
    }

    /// 创建文章
    ///
    /// 成功后文章被追加到注册表末尾，并追加到目标杂志的文章集合
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, CatalogError> {
        let title = ArticleTitle::new(title)?;
        let author = self
            .authors
            .iter()
            .find(|a| a.id() == author)
            .ok_or(CatalogError::AuthorNotFound(author))?;
        let magazine_index = self.magazine_index(magazine)?;

        let article = Article::new(title, author, &self.magazines[magazine_index]);
        let id = article.id();
        tracing::info!(
            article_id = %id,
            author_id = %article.author_id(),
            magazine_id = %article.magazine_id(),
            title = %article.title(),
            "Article created"
        );

        self.magazines[magazine_index].attach(id);
        self.articles.push(article);
        Ok(id)
    }

    /// 以作者身份发表文章，校验规则与 `create_article` 相同
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, CatalogError> {
        self.create_article(author, magazine, title)
    }

    // ------------------------------------------------------------------------
    // 修改
    // ------------------------------------------------------------------------

    /// 重命名杂志，已有文章的引用不受影响
    pub fn rename_magazine(
        &mut self,
        magazine: MagazineId,
        name: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let name = MagazineName::new(name)?;
        let index = self.magazine_index(magazine)?;
        tracing::info!(
            magazine_id = %magazine,
            from = %self.magazines[index].name(),
            to = %name,
            "Magazine renamed"
        );
        self.magazines[index].rename(name);
        Ok(())
    }

    /// 修改杂志分类
    pub fn set_magazine_category(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let category = Category::new(category)?;
        let index = self.magazine_index(magazine)?;
        tracing::info!(
            magazine_id = %magazine,
            from = %self.magazines[index].category(),
            to = %category,
            "Magazine category changed"
        );
        self.magazines[index].set_category(category);
        Ok(())
    }

    /// 重新指派文章作者
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        author: AuthorId,
    ) -> Result<(), CatalogError> {
        let new_author = self
            .authors
            .iter()
            .find(|a| a.id() == author)
            .ok_or(CatalogError::AuthorNotFound(author))?;
        let entry = self
            .articles
            .iter_mut()
            .find(|a| a.id() == article)
            .ok_or(CatalogError::ArticleNotFound(article))?;

        tracing::debug!(
            article_id = %article,
            from = %entry.author_id(),
            to = %author,
            "Article author reassigned"
        );
        entry.set_author(new_author);
        Ok(())
    }

    /// 重新指派文章所属杂志
    ///
    /// 只替换引用：原杂志的文章集合仍然列出该文章，新杂志的集合不会加入它。
    /// 需要同步集合时使用 `transfer_article`。
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), CatalogError> {
        let index = self.magazine_index(magazine)?;
        let new_magazine = &self.magazines[index];
        let entry = self
            .articles
            .iter_mut()
            .find(|a| a.id() == article)
            .ok_or(CatalogError::ArticleNotFound(article))?;

        let previous = entry.magazine_id();
        entry.set_magazine(new_magazine);
        if previous != magazine && !new_magazine.lists(article) {
            tracing::warn!(
                article_id = %article,
                from = %previous,
                to = %magazine,
                "Article magazine reassigned without moving it between collections"
            );
        } else {
            tracing::debug!(article_id = %article, to = %magazine, "Article magazine reassigned");
        }
        Ok(())
    }

    /// 将文章转移到另一本杂志，同时更新所有受影响的文章集合
    ///
    /// 转移后文章只出现在目标杂志的集合中（恰好一次）
    pub fn transfer_article(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), CatalogError> {
        let target = self.magazine_index(magazine)?;
        let article_index = self
            .articles
            .iter()
            .position(|a| a.id() == article)
            .ok_or(CatalogError::ArticleNotFound(article))?;

        let previous = self.articles[article_index].magazine_id();
        for (index, entry) in self.magazines.iter_mut().enumerate() {
            if index != target {
                entry.detach(article);
            }
        }
        self.magazines[target].attach(article);
        self.articles[article_index].set_magazine(&self.magazines[target]);

        tracing::info!(
            article_id = %article,
            from = %previous,
            to = %magazine,
            "Article transferred"
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // 查询
    // ------------------------------------------------------------------------

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id() == id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.id() == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }

    /// 文章当前引用的作者
    pub fn article_author(&self, article: ArticleId) -> Option<&Author> {
        self.article(article)
            .and_then(|entry| self.author(entry.author_id()))
    }

    /// 文章当前引用的杂志（不一定是列出它的那本，见 `set_article_magazine`）
    pub fn article_magazine(&self, article: ArticleId) -> Option<&Magazine> {
        self.article(article)
            .and_then(|entry| self.magazine(entry.magazine_id()))
    }

    /// 按姓名查找作者（返回最早创建的同名作者）
    pub fn find_author_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name().as_str() == name)
    }

    /// 按名称查找杂志（返回最早创建的同名杂志）
    pub fn find_magazine_by_name(&self, name: &str) -> Option<&Magazine> {
        self.magazines.iter().find(|m| m.name().as_str() == name)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// 全部文章，按创建顺序
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn author_articles(&self, author: AuthorId) -> Result<Vec<&Article>, CatalogError> {
        Ok(self.require_author(author)?.articles(self))
    }

    pub fn author_magazines(&self, author: AuthorId) -> Result<Vec<&Magazine>, CatalogError> {
        Ok(self.require_author(author)?.magazines(self))
    }

    pub fn author_topic_areas(&self, author: AuthorId) -> Result<Vec<&Category>, CatalogError> {
        Ok(self.require_author(author)?.topic_areas(self))
    }

    /// 杂志自身集合中的文章，按追加顺序
    pub fn magazine_articles(&self, magazine: MagazineId) -> Result<Vec<&Article>, CatalogError> {
        let magazine = self
            .magazine(magazine)
            .ok_or(CatalogError::MagazineNotFound(magazine))?;
        Ok(magazine
            .articles()
            .iter()
            .filter_map(|id| self.article(*id))
            .collect())
    }

    pub fn magazine_contributors(&self, magazine: MagazineId) -> Result<Vec<&Author>, CatalogError> {
        let magazine = self
            .magazine(magazine)
            .ok_or(CatalogError::MagazineNotFound(magazine))?;
        Ok(magazine.contributors(self))
    }

    fn require_author(&self, author: AuthorId) -> Result<&Author, CatalogError> {
        self.author(author).ok_or(CatalogError::AuthorNotFound(author))
    }

    fn magazine_index(&self, magazine: MagazineId) -> Result<usize, CatalogError> {
        self.magazines
            .iter()
            .position(|m| m.id() == magazine)
            .ok_or(CatalogError::MagazineNotFound(magazine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::Field;

    fn fixture() -> (Catalog, AuthorId, MagazineId) {
        let mut catalog = Catalog::new();
        let sue = catalog.add_author("Sue").unwrap();
        let vogue = catalog.add_magazine("Vogue", "Fashion").unwrap();
        (catalog, sue, vogue)
    }

    #[test]
    fn test_create_article_registers_twice() {
        let (mut catalog, sue, vogue) = fixture();
        let id = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        assert_eq!(catalog.article_count(), 1);
        assert_eq!(catalog.magazine(vogue).unwrap().articles(), &[id]);
        let article = catalog.article(id).unwrap();
        assert_eq!(article.title().as_str(), "Autumn Styles 2024");
        assert_eq!(article.author_id(), sue);
        assert_eq!(article.magazine_id(), vogue);
    }

    #[test]
    fn test_invalid_title_has_no_side_effects() {
        let (mut catalog, sue, vogue) = fixture();
        let err = catalog.create_article(sue, vogue, "Hi").unwrap_err();

        match err {
            CatalogError::Validation(e) => assert_eq!(e.field(), Field::ArticleTitle),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(catalog.article_count(), 0);
        assert!(catalog.magazine(vogue).unwrap().articles().is_empty());
    }

    #[test]
    fn test_unknown_references_rejected_without_side_effects() {
        let (mut catalog, sue, vogue) = fixture();

        let err = catalog
            .create_article(AuthorId::new(), vogue, "Ghost Writer")
            .unwrap_err();
        assert!(matches!(err, CatalogError::AuthorNotFound(_)));

        let err = catalog
            .create_article(sue, MagazineId::new(), "Nowhere Issue")
            .unwrap_err();
        assert!(matches!(err, CatalogError::MagazineNotFound(_)));

        assert_eq!(catalog.article_count(), 0);
        assert!(catalog.magazine(vogue).unwrap().articles().is_empty());
    }

    #[test]
    fn test_rename_magazine_validates() {
        let (mut catalog, sue, vogue) = fixture();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        assert!(catalog.rename_magazine(vogue, "V").is_err());
        assert_eq!(catalog.magazine(vogue).unwrap().name().as_str(), "Vogue");

        catalog.rename_magazine(vogue, "Vogue Italia").unwrap();
        let magazine_id = catalog.article(article).unwrap().magazine_id();
        assert_eq!(
            catalog.magazine(magazine_id).unwrap().name().as_str(),
            "Vogue Italia"
        );
    }

    #[test]
    fn test_set_category_validates() {
        let (mut catalog, _, vogue) = fixture();
        assert!(matches!(
            catalog.set_magazine_category(vogue, ""),
            Err(CatalogError::Validation(ValidationError::Empty { .. }))
        ));
        catalog.set_magazine_category(vogue, "Style").unwrap();
        assert_eq!(catalog.magazine(vogue).unwrap().category().as_str(), "Style");
    }

    #[test]
    fn test_set_article_author_moves_queries() {
        let (mut catalog, sue, vogue) = fixture();
        let bob = catalog.add_author("Bob").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        catalog.set_article_author(article, bob).unwrap();

        assert!(catalog.author_articles(sue).unwrap().is_empty());
        assert_eq!(catalog.author_articles(bob).unwrap().len(), 1);
        assert!(matches!(
            catalog.set_article_author(article, AuthorId::new()),
            Err(CatalogError::AuthorNotFound(_))
        ));
    }

    #[test]
    fn test_set_article_magazine_keeps_collections() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        catalog.set_article_magazine(article, elle).unwrap();

        assert_eq!(catalog.article(article).unwrap().magazine_id(), elle);
        assert_eq!(catalog.magazine(vogue).unwrap().articles(), &[article]);
        assert!(catalog.magazine(elle).unwrap().articles().is_empty());

        let topics: Vec<&str> = catalog
            .author_topic_areas(sue)
            .unwrap()
            .iter()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(topics, vec!["Style"]);
    }

    #[test]
    fn test_transfer_article_moves_between_collections() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        catalog.transfer_article(article, elle).unwrap();

        assert_eq!(catalog.article(article).unwrap().magazine_id(), elle);
        assert!(catalog.magazine(vogue).unwrap().articles().is_empty());
        assert_eq!(catalog.magazine(elle).unwrap().articles(), &[article]);

        // 转移到当前杂志不会重复登记
        catalog.transfer_article(article, elle).unwrap();
        assert_eq!(catalog.magazine(elle).unwrap().articles(), &[article]);
    }

    #[test]
    fn test_transfer_repairs_asymmetric_reassignment() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let wired = catalog.add_magazine("Wired", "Tech").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        catalog.set_article_magazine(article, elle).unwrap();
        catalog.transfer_article(article, wired).unwrap();

        assert!(catalog.magazine(vogue).unwrap().articles().is_empty());
        assert!(catalog.magazine(elle).unwrap().articles().is_empty());
        assert_eq!(catalog.magazine(wired).unwrap().articles(), &[article]);
    }

    #[test]
    fn test_magazine_articles_resolves_own_collection() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();
        catalog.create_article(sue, elle, "Street Style Now").unwrap();
        catalog.create_article(sue, vogue, "Winter Palette").unwrap();

        let titles: Vec<&str> = catalog
            .magazine_articles(vogue)
            .unwrap()
            .iter()
            .map(|a| a.title().as_str())
            .collect();
        assert_eq!(titles, vec!["Autumn Styles 2024", "Winter Palette"]);
        assert!(catalog.magazine_articles(MagazineId::new()).is_err());
    }

    #[test]
    fn test_find_by_name() {
        let (catalog, sue, vogue) = fixture();
        assert_eq!(catalog.find_author_by_name("Sue").map(Author::id), Some(sue));
        assert_eq!(
            catalog.find_magazine_by_name("Vogue").map(Magazine::id),
            Some(vogue)
        );
        assert!(catalog.find_author_by_name("Nobody").is_none());
    }

    /// 每本杂志的文章集合快照，用于断言失败操作没有副作用
    fn collections(catalog: &Catalog) -> Vec<Vec<ArticleId>> {
        catalog
            .magazines()
            .iter()
            .map(|m| m.articles().to_vec())
            .collect()
    }

    #[test]
    fn test_reference_setters_reject_unknown_ids_without_side_effects() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();
        let registry = catalog.articles().to_vec();
        let lists = collections(&catalog);

        assert!(matches!(
            catalog.set_article_author(ArticleId::new(), sue),
            Err(CatalogError::ArticleNotFound(_))
        ));
        assert!(matches!(
            catalog.set_article_magazine(ArticleId::new(), elle),
            Err(CatalogError::ArticleNotFound(_))
        ));
        assert!(matches!(
            catalog.set_article_magazine(article, MagazineId::new()),
            Err(CatalogError::MagazineNotFound(_))
        ));

        assert_eq!(catalog.articles(), registry.as_slice());
        assert_eq!(collections(&catalog), lists);
        assert_eq!(catalog.article(article).unwrap().magazine_id(), vogue);
    }

    #[test]
    fn test_failed_transfer_leaves_catalog_untouched() {
        let (mut catalog, sue, vogue) = fixture();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();
        let registry = catalog.articles().to_vec();
        let lists = collections(&catalog);

        assert!(matches!(
            catalog.transfer_article(ArticleId::new(), elle),
            Err(CatalogError::ArticleNotFound(_))
        ));
        assert!(matches!(
            catalog.transfer_article(article, MagazineId::new()),
            Err(CatalogError::MagazineNotFound(_))
        ));

        assert_eq!(catalog.articles(), registry.as_slice());
        assert_eq!(collections(&catalog), lists);
        assert_eq!(catalog.magazine(vogue).unwrap().articles(), &[article]);
        assert!(catalog.magazine(elle).unwrap().articles().is_empty());
    }

    #[test]
    fn test_article_author_and_magazine_resolve_references() {
        let (mut catalog, sue, vogue) = fixture();
        let bob = catalog.add_author("Bob").unwrap();
        let elle = catalog.add_magazine("Elle", "Style").unwrap();
        let article = catalog.create_article(sue, vogue, "Autumn Styles 2024").unwrap();

        assert_eq!(catalog.article_author(article).map(Author::id), Some(sue));
        assert_eq!(catalog.article_magazine(article).map(Magazine::id), Some(vogue));

        catalog.set_article_author(article, bob).unwrap();
        catalog.set_article_magazine(article, elle).unwrap();
        assert_eq!(
            catalog.article_author(article).map(|a| a.name().as_str()),
            Some("Bob")
        );
        assert_eq!(
            catalog.article_magazine(article).map(|m| m.name().as_str()),
            Some("Elle")
        );

        assert!(catalog.article_author(ArticleId::new()).is_none());
        assert!(catalog.article_magazine(ArticleId::new()).is_none());
    }
}
