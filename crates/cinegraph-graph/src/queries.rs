//! Fixed Cypher queries for the movie graph and their bound parameters.

use neo4rs::{query, Query};

const MOVIE_BY_ID: &str = "MATCH (m:Movie)
     WHERE ID(m) = $id
     RETURN ID(m) AS id, m.name AS name";

const MOVIES_BY_DIRECTOR: &str = "MATCH (m:Movie)-[:DIRECTED_BY]->(d:Director)
     WHERE d.name = $name
     RETURN ID(m) AS id, m.name AS name";

const MOVIES_FEATURING_ACTOR: &str = "MATCH (m:Movie)<-[:STARRED_IN]-(a:Actor)
     WHERE a.name = $name
     RETURN ID(m) AS id, m.name AS name";

const MOVIES_OF_GENRE: &str = "MATCH (m:Movie)-[:OF_GENRE]->(g:Genre)
     WHERE g.name = $name
     RETURN ID(m) AS id, m.name AS name";

/// The catalog of supported movie queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieQuery {
    ById,
    ByDirector,
    FeaturingActor,
    OfGenre,
}

impl MovieQuery {
    /// Cypher text for this query.
    pub fn text(&self) -> &'static str {
        match self {
            Self::ById => MOVIE_BY_ID,
            Self::ByDirector => MOVIES_BY_DIRECTOR,
            Self::FeaturingActor => MOVIES_FEATURING_ACTOR,
            Self::OfGenre => MOVIES_OF_GENRE,
        }
    }

    /// Name of the single parameter the query expects.
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::ById => "id",
            Self::ByDirector | Self::FeaturingActor | Self::OfGenre => "name",
        }
    }

    /// Operation name, as exposed by the API.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ById => "getMovieById",
            Self::ByDirector => "getMoviesByDirector",
            Self::FeaturingActor => "getMoviesFeaturingActor",
            Self::OfGenre => "getMoviesOfGenre",
        }
    }
}

/// A value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    String(String),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// A catalog query together with the values bound for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    kind: MovieQuery,
    params: Vec<(&'static str, ParamValue)>,
}

impl QueryDescriptor {
    fn bind(kind: MovieQuery, value: impl Into<ParamValue>) -> Self {
        Self {
            kind,
            params: vec![(kind.param_name(), value.into())],
        }
    }

    pub fn movie_by_id(id: i64) -> Self {
        Self::bind(MovieQuery::ById, id)
    }

    pub fn movies_by_director(name: &str) -> Self {
        Self::bind(MovieQuery::ByDirector, name)
    }

    pub fn movies_featuring_actor(name: &str) -> Self {
        Self::bind(MovieQuery::FeaturingActor, name)
    }

    pub fn movies_of_genre(name: &str) -> Self {
        Self::bind(MovieQuery::OfGenre, name)
    }

    pub fn kind(&self) -> MovieQuery {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.kind.text()
    }

    pub fn params(&self) -> &[(&'static str, ParamValue)] {
        &self.params
    }

    /// Look up a bound parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Placeholder names (`$name`) referenced by the query text, sorted and deduplicated.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let text = self.text();
        let mut names = Vec::new();
        let mut rest = text;
        while let Some(pos) = rest.find('$') {
            let after = &rest[pos + 1..];
            let len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            if len > 0 {
                names.push(&after[..len]);
            }
            rest = &after[len..];
        }
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Build the neo4rs query with every parameter bound.
    pub fn to_query(&self) -> Query {
        self.params
            .iter()
            .fold(query(self.text()), |q, (name, value)| match value {
                ParamValue::Int(v) => q.param(name, *v),
                ParamValue::String(v) => q.param(name, v.clone()),
            })
    }
}
