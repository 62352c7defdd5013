//! Expression tokenizer and recursive descent parser

use crate::calc::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Operator symbol, `%` is resolved to modulo or percent by the parser
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token can start an operand
    #[must_use]
    pub const fn starts_operand(&self) -> bool {
        match self {
            Self::Number(_) | Self::LeftParen => true,
            Self::Operator(op) => op.is_sign(),
            Self::RightParen => false,
        }
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
    /// Postfix percent (value / 100)
    Percent(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }

    /// Creates a new percent node
    #[must_use]
    pub fn percent(inner: AstNode) -> Self {
        Self::Percent(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => return self.read_number().map(Some),
            '+' => Token::Operator(Operation::Add),
            '-' => Token::Operator(Operation::Subtract),
            '*' => Token::Operator(Operation::Multiply),
            '/' => Token::Operator(Operation::Divide),
            '%' => Token::Operator(Operation::Modulo),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            _ => {
                return Err(CalcError::ParseError(format!(
                    "Unexpected character: '{ch}'"
                )));
            }
        };
        self.advance();

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/' | '%') unary)*
/// unary      ::= ('-' | '+') unary | postfix
/// postfix    ::= primary '%'*          // '%' with no operand after it
/// primary    ::= NUMBER | '(' expression ')'
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

/// Deepest allowed nesting of parentheses and signs
pub const MAX_DEPTH: usize = 256;

/// Longest accepted token stream; keeps operator chains, and so the tree, shallow
pub const MAX_TOKENS: usize = 1024;

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST, rejecting leftovers
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }
        if self.tokens.len() > MAX_TOKENS {
            return Err(CalcError::ParseError("Expression too long".into()));
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::ParseError(format!(
                "Unexpected token {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> CalcResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::ParseError("Expression nested too deeply".into()));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(
            op @ (Operation::Multiply | Operation::Divide | Operation::Modulo),
        )) = self.current()
        {
            let op = *op;
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                self.enter()?;
                let inner = self.parse_unary()?;
                self.leave();
                Ok(AstNode::negate(inner))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.enter()?;
                let inner = self.parse_unary()?;
                self.leave();
                Ok(inner)
            }
            _ => self.parse_postfix(),
        }
    }

    fn parse_postfix(&mut self) -> CalcResult<AstNode> {
        let mut node = self.parse_primary()?;

        while self.at_postfix_percent() {
            self.advance();
            node = AstNode::percent(node);
        }

        Ok(node)
    }

    /// A `%` is a percent sign when nothing that could start an operand follows
    fn at_postfix_percent(&self) -> bool {
        matches!(self.current(), Some(Token::Operator(Operation::Modulo)))
            && !self.peek().is_some_and(Token::starts_operand)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::ParseError("Unexpected end of expression".into()))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(*n)),
            Token::LeftParen => {
                self.enter()?;
                let expr = self.parse_expression()?;
                self.leave();
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::ParseError(format!(
                        "Expected ')' but found {t:?}"
                    ))),
                    None => Err(CalcError::ParseError("Unclosed parenthesis".into())),
                }
            }
            _ => Err(CalcError::ParseError(format!(
                "Unexpected token: {token:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Token tests =====

    #[test]
    fn test_token_is_operator() {
        assert!(Token::Operator(Operation::Add).is_operator());
        assert!(!Token::Number(5.0).is_operator());
        assert!(!Token::LeftParen.is_operator());
    }

    #[test]
    fn test_token_starts_operand() {
        assert!(Token::Number(1.0).starts_operand());
        assert!(Token::LeftParen.starts_operand());
        assert!(Token::Operator(Operation::Subtract).starts_operand());
        assert!(!Token::Operator(Operation::Multiply).starts_operand());
        assert!(!Token::RightParen.starts_operand());
    }

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_simple() {
        let tokens = Tokenizer::new("1 + 2").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(1.0),
                Token::Operator(Operation::Add),
                Token::Number(2.0)
            ]
        );
    }

    #[test]
    fn test_tokenize_decimal_forms() {
        let tokens = Tokenizer::new(".5 3.").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(0.5), Token::Number(3.0)]);
    }

    #[test]
    fn test_tokenize_lone_dot_fails() {
        assert!(matches!(
            Tokenizer::new(".").tokenize(),
            Err(CalcError::ParseError(_))
        ));
    }

    #[test]
    fn test_tokenize_unexpected_char() {
        let result = Tokenizer::new("2 ^ 3").tokenize();
        assert!(matches!(result, Err(CalcError::ParseError(msg)) if msg.contains('^')));
    }

    #[test]
    fn test_tokenize_parens_and_percent() {
        let tokens = Tokenizer::new("(5)%").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                Token::Number(5.0),
                Token::RightParen,
                Token::Operator(Operation::Modulo)
            ]
        );
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_precedence() {
        let ast = Parser::parse_str("1 + 2 * 3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(1.0),
                Operation::Add,
                AstNode::binary(AstNode::number(2.0), Operation::Multiply, AstNode::number(3.0))
            )
        );
    }

    #[test]
    fn test_parse_left_associative() {
        let ast = Parser::parse_str("8 - 4 - 2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::binary(AstNode::number(8.0), Operation::Subtract, AstNode::number(4.0)),
                Operation::Subtract,
                AstNode::number(2.0)
            )
        );
    }

    #[test]
    fn test_parse_trailing_percent() {
        let ast = Parser::parse_str("10%").unwrap();
        assert_eq!(ast, AstNode::percent(AstNode::number(10.0)));
    }

    #[test]
    fn test_parse_modulo_when_operand_follows() {
        let ast = Parser::parse_str("10%3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(AstNode::number(10.0), Operation::Modulo, AstNode::number(3.0))
        );
    }

    #[test]
    fn test_parse_modulo_with_signed_operand() {
        let ast = Parser::parse_str("10 % -3").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::number(10.0),
                Operation::Modulo,
                AstNode::negate(AstNode::number(3.0))
            )
        );
    }

    #[test]
    fn test_parse_percent_before_multiply() {
        let ast = Parser::parse_str("50%*2").unwrap();
        assert_eq!(
            ast,
            AstNode::binary(
                AstNode::percent(AstNode::number(50.0)),
                Operation::Multiply,
                AstNode::number(2.0)
            )
        );
    }

    #[test]
    fn test_parse_double_percent() {
        let ast = Parser::parse_str("10%%").unwrap();
        assert_eq!(ast, AstNode::percent(AstNode::percent(AstNode::number(10.0))));
    }

    #[test]
    fn test_parse_unary_plus_and_minus() {
        assert_eq!(
            Parser::parse_str("+-5").unwrap(),
            AstNode::negate(AstNode::number(5.0))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Parser::parse_str(""), Err(CalcError::EmptyExpression));
        assert_eq!(Parser::parse_str("   "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_parse_incomplete() {
        assert!(matches!(Parser::parse_str("2+"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_unclosed_paren() {
        let result = Parser::parse_str("(1 + 2");
        assert!(matches!(result, Err(CalcError::ParseError(msg)) if msg.contains("Unclosed")));
    }

    #[test]
    fn test_parse_nesting_at_limit() {
        let expr = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(Parser::parse_str(&expr).is_ok());
    }

    #[test]
    fn test_parse_nesting_past_limit() {
        let expr = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            Parser::parse_str(&expr),
            Err(CalcError::ParseError(msg)) if msg.contains("nested too deeply")
        ));
    }

    #[test]
    fn test_parse_sign_chain_past_limit() {
        let expr = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert!(matches!(Parser::parse_str(&expr), Err(CalcError::ParseError(_))));
        assert!(Parser::parse_str(&format!("{}1", "-".repeat(10))).is_ok());
    }

    #[test]
    fn test_parse_too_many_tokens() {
        let expr = vec!["1"; MAX_TOKENS].join("+");
        assert!(matches!(
            Parser::parse_str(&expr),
            Err(CalcError::ParseError(msg)) if msg.contains("too long")
        ));
    }

    #[test]
    fn test_parse_unmatched_close_paren() {
        assert!(matches!(Parser::parse_str("1 + 2)"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_adjacent_numbers() {
        assert!(matches!(Parser::parse_str("1.2.3"), Err(CalcError::ParseError(_))));
        assert!(matches!(Parser::parse_str("2 (3)"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_empty_parens() {
        assert!(matches!(Parser::parse_str("()"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parser_new_empty_tokens() {
        assert_eq!(Parser::new(vec![]).parse(), Err(CalcError::EmptyExpression));
    }
}
